//! Bidirectional cursors over the indices of a range.

use std::cmp::Ordering;
use strata_core::GridIndex;

/// Inclusive per-axis bounds of an index range.
///
/// The range is empty iff `max[0] < min[0]`; the constructors keep every
/// axis empty or non-empty together, so checking axis 0 suffices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds<const D: usize> {
    pub(crate) min: GridIndex<D>,
    pub(crate) max: GridIndex<D>,
}

impl<const D: usize> Bounds<D> {
    /// Lowest index (inclusive).
    pub fn min(&self) -> GridIndex<D> {
        self.min
    }

    /// Highest index (inclusive).
    pub fn max(&self) -> GridIndex<D> {
        self.max
    }
}

/// A position within an [`IndexRange`](crate::IndexRange).
///
/// Holds the current index by value and a shared borrow of the owning
/// range's bounds. Stepping carries across axes `0..D-1`; the last axis
/// never wraps, which is how the one-past-the-end sentinel is formed.
///
/// Comparing cursors taken from ranges with different bounds is a logic
/// error. Debug builds assert on it; release builds compare the indices
/// regardless.
#[derive(Clone, Copy, Debug)]
pub struct IndexCursor<'a, const D: usize> {
    index: GridIndex<D>,
    bounds: &'a Bounds<D>,
}

impl<'a, const D: usize> IndexCursor<'a, D> {
    pub(crate) fn new(index: GridIndex<D>, bounds: &'a Bounds<D>) -> Self {
        Self { index, bounds }
    }

    /// The index at this position.
    ///
    /// Reading at the end sentinel yields an index outside the range.
    pub fn get(&self) -> GridIndex<D> {
        self.index
    }

    /// Bounds of the range this cursor belongs to.
    pub fn bounds(&self) -> &'a Bounds<D> {
        self.bounds
    }

    /// Step one index forward in raster order.
    pub fn inc(&mut self) -> &mut Self {
        let Bounds { min, max } = *self.bounds;
        for axis in 0..D - 1 {
            self.index[axis] += 1;
            if self.index[axis] <= max[axis] {
                return self;
            }
            self.index[axis] = min[axis];
        }
        self.index[D - 1] += 1;
        self
    }

    /// Step one index backward in raster order.
    pub fn dec(&mut self) -> &mut Self {
        let Bounds { min, max } = *self.bounds;
        for axis in 0..D - 1 {
            self.index[axis] -= 1;
            if self.index[axis] >= min[axis] {
                return self;
            }
            self.index[axis] = max[axis];
        }
        self.index[D - 1] -= 1;
        self
    }
}

impl<const D: usize> PartialEq for IndexCursor<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert_eq!(
            self.bounds, other.bounds,
            "comparing cursors of different ranges"
        );
        self.index == other.index
    }
}

impl<const D: usize> Eq for IndexCursor<'_, D> {}

impl<const D: usize> PartialOrd for IndexCursor<'_, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        debug_assert_eq!(
            self.bounds, other.bounds,
            "comparing cursors of different ranges"
        );
        Some(self.index.cmp(&other.index))
    }
}

/// Adapter that walks an [`IndexCursor`] backwards.
///
/// Follows the usual reverse-adapter convention: a reverse cursor built
/// on base position `p` reads the index *before* `p`. Hence
/// `rbegin()` wraps `end()` and `rend()` wraps `begin()`.
#[derive(Clone, Copy, Debug)]
pub struct ReverseCursor<'a, const D: usize> {
    base: IndexCursor<'a, D>,
}

impl<'a, const D: usize> ReverseCursor<'a, D> {
    /// Wrap a forward cursor.
    pub fn new(base: IndexCursor<'a, D>) -> Self {
        Self { base }
    }

    /// The underlying forward position.
    pub fn base(&self) -> IndexCursor<'a, D> {
        self.base
    }

    /// The index this reverse cursor reads: the one before its base.
    pub fn get(&self) -> GridIndex<D> {
        let mut before = self.base;
        before.dec();
        before.get()
    }

    /// Move toward the start of the range.
    pub fn inc(&mut self) -> &mut Self {
        self.base.dec();
        self
    }

    /// Move toward the end of the range.
    pub fn dec(&mut self) -> &mut Self {
        self.base.inc();
        self
    }
}

impl<const D: usize> PartialEq for ReverseCursor<'_, D> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<const D: usize> Eq for ReverseCursor<'_, D> {}

impl<const D: usize> PartialOrd for ReverseCursor<'_, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.base.partial_cmp(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use crate::range::{RegionIndexRange, ZeroBasedIndexRange};
    use strata_core::{GridIndex, GridRegion, GridSize};

    #[test]
    fn inc_carries_into_next_axis() {
        let range = ZeroBasedIndexRange::new(GridSize::new([2, 2, 2]));
        let mut c = range.begin();
        c.inc();
        assert_eq!(c.get(), GridIndex::new([1, 0, 0]));
        c.inc();
        assert_eq!(c.get(), GridIndex::new([0, 1, 0]));
        c.inc().inc();
        assert_eq!(c.get(), GridIndex::new([0, 0, 1]));
    }

    #[test]
    fn dec_borrows_from_next_axis() {
        let range = ZeroBasedIndexRange::new(GridSize::new([2, 3]));
        let mut c = range.end();
        c.dec();
        assert_eq!(c.get(), GridIndex::new([1, 2]));
        c.dec().dec();
        assert_eq!(c.get(), GridIndex::new([1, 1]));
    }

    #[test]
    fn end_sets_last_axis_one_past_max() {
        let range = RegionIndexRange::from_region(&GridRegion::new(
            GridIndex::new([5, -2]),
            GridSize::new([3, 2]),
        ));
        assert_eq!(range.end().get(), GridIndex::new([5, 0]));
    }

    #[test]
    fn one_dimensional_cursor_steps_last_axis_directly() {
        let range = ZeroBasedIndexRange::new(GridSize::new([3]));
        let mut c = range.begin();
        c.inc().inc().inc();
        assert!(c == range.end());
        c.dec();
        assert_eq!(c.get(), GridIndex::new([2]));
    }

    #[test]
    fn cursor_ordering_follows_raster_order() {
        let range = ZeroBasedIndexRange::new(GridSize::new([3, 3]));
        let a = range.begin();
        let mut b = range.begin();
        b.inc();
        assert!(a < b);
        assert!(b > a);
        assert!(a <= range.begin());
        assert!(b < range.end());
    }

    #[test]
    fn reverse_cursor_reads_element_before_base() {
        let range = ZeroBasedIndexRange::new(GridSize::new([2, 2]));
        let mut r = range.rbegin();
        assert_eq!(r.get(), GridIndex::new([1, 1]));
        r.inc();
        assert_eq!(r.get(), GridIndex::new([0, 1]));
        assert!(range.rbegin() < r);
        r.inc().inc().inc();
        assert!(r == range.rend());
        r.dec();
        assert_eq!(r.get(), GridIndex::new([0, 0]));
    }

    #[test]
    fn cursors_of_equal_ranges_compare() {
        let a = ZeroBasedIndexRange::new(GridSize::new([2, 2]));
        let b = ZeroBasedIndexRange::new(GridSize::new([2, 2]));
        assert!(a.begin() == b.begin());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "comparing cursors of different ranges")]
    fn comparing_cursors_of_different_ranges_asserts() {
        let a = ZeroBasedIndexRange::new(GridSize::new([2, 2]));
        let b = ZeroBasedIndexRange::new(GridSize::new([3, 2]));
        let _ = a.begin() == b.begin();
    }
}
