//! Index range law test helpers.
//!
//! These functions verify that a range satisfies the traversal contract:
//! length, distinctness, raster ordering, cursor round-trips, and reverse
//! traversal. Reused by the unit and property tests of every module.

use crate::range::IndexRange;
use indexmap::IndexSet;
use strata_core::GridIndex;

/// Assert that iteration yields exactly `len()` distinct, contained indices.
pub fn assert_len_matches_iteration<const D: usize, const Z: bool>(range: &IndexRange<D, Z>) {
    let seen: IndexSet<GridIndex<D>> = range.iter().collect();
    assert_eq!(
        seen.len(),
        range.len(),
        "iteration produced {} distinct indices, len() = {}",
        seen.len(),
        range.len()
    );
    assert_eq!(range.iter().count(), range.len(), "iteration produced duplicates");
    for index in &seen {
        assert!(range.contains(index), "{index} yielded but not contained");
    }
}

/// Assert that consecutive indices are strictly increasing in raster order.
pub fn assert_strictly_increasing<const D: usize, const Z: bool>(range: &IndexRange<D, Z>) {
    let all: Vec<_> = range.iter().collect();
    for pair in all.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
    }
}

/// Assert that `len()` increments from `begin()` reach `end()`, and `len()`
/// decrements from `end()` return to `begin()`.
pub fn assert_cursor_round_trip<const D: usize, const Z: bool>(range: &IndexRange<D, Z>) {
    let mut forward = range.begin();
    for _ in 0..range.len() {
        assert!(forward < range.end(), "reached end early");
        forward.inc();
    }
    assert!(forward == range.end(), "forward walk missed end()");

    let mut backward = range.end();
    for _ in 0..range.len() {
        backward.dec();
    }
    assert!(backward == range.begin(), "backward walk missed begin()");
}

/// Assert that cursor stepping agrees with the iterator.
pub fn assert_cursor_matches_iterator<const D: usize, const Z: bool>(range: &IndexRange<D, Z>) {
    let mut cursor = range.begin();
    for expected in range.iter() {
        assert_eq!(cursor.get(), expected);
        cursor.inc();
    }
}

/// Assert that both reverse mechanisms yield the forward sequence reversed.
pub fn assert_reverse_matches_forward<const D: usize, const Z: bool>(range: &IndexRange<D, Z>) {
    let mut forward: Vec<_> = range.iter().collect();
    forward.reverse();

    let via_rev: Vec<_> = range.iter().rev().collect();
    assert_eq!(via_rev, forward, "iter().rev() differs from reversed forward");

    let mut via_cursor = Vec::with_capacity(range.len());
    let mut r = range.rbegin();
    while r != range.rend() {
        via_cursor.push(r.get());
        r.inc();
    }
    assert_eq!(via_cursor, forward, "rbegin..rend differs from reversed forward");
}

/// Run every check on a range.
pub fn run_full_compliance<const D: usize, const Z: bool>(range: &IndexRange<D, Z>) {
    assert_len_matches_iteration(range);
    assert_strictly_increasing(range);
    assert_cursor_round_trip(range);
    assert_cursor_matches_iterator(range);
    assert_reverse_matches_forward(range);
}
