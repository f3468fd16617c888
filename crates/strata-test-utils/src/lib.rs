//! Test utilities and mock types for Strata development.
//!
//! Provides a closure-backed [`MockField`] implementing
//! [`ScalarField`], a [`RecordingProgress`] sink, set-based assertions
//! over extractor output, and analytic image [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::fmt::Debug;

use indexmap::IndexSet;
use strata_core::{GridIndex, GridRegion, ProgressSink, ScalarField};

/// Mock implementation of [`ScalarField`].
///
/// Evaluates a closure on demand and counts pixel reads, so tests can
/// check how much of the field a pass touched.
pub struct MockField<const D: usize, G> {
    region: GridRegion<D>,
    spacing: [f64; D],
    sample: G,
    reads: Cell<usize>,
}

impl<const D: usize, G: Fn(&GridIndex<D>) -> f64> MockField<D, G> {
    pub fn new(region: GridRegion<D>, spacing: [f64; D], sample: G) -> Self {
        Self {
            region,
            spacing,
            sample,
            reads: Cell::new(0),
        }
    }

    /// Number of `pixel` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl<const D: usize, G: Fn(&GridIndex<D>) -> f64> ScalarField<D> for MockField<D, G> {
    fn spacing(&self, axis: usize) -> f64 {
        self.spacing[axis]
    }

    fn pixel(&self, index: &GridIndex<D>) -> f64 {
        assert!(
            self.region.is_inside(index),
            "mock field read outside region: {index}"
        );
        self.reads.set(self.reads.get() + 1);
        (self.sample)(index)
    }

    fn buffered_region(&self) -> GridRegion<D> {
        self.region
    }
}

/// Progress sink that records every reported fraction.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub fractions: Vec<f32>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fractions must be in `[0, 1)` and strictly increasing.
    pub fn assert_monotonic(&self) {
        for pair in self.fractions.windows(2) {
            assert!(pair[0] < pair[1], "progress went backwards: {pair:?}");
        }
        for &f in &self.fractions {
            assert!((0.0..1.0).contains(&f), "fraction {f} out of range");
        }
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&mut self, fraction: f32) {
        self.fractions.push(fraction);
    }
}

/// Collect `items` into an insertion-ordered set, panicking on the
/// first duplicate.
pub fn assert_distinct<T, I>(items: I) -> IndexSet<T>
where
    T: std::hash::Hash + Eq + Debug,
    I: IntoIterator<Item = T>,
{
    let mut seen = IndexSet::new();
    for item in items {
        assert!(seen.insert(item), "duplicate entry in sequence");
    }
    seen
}

/// `a` and `b` share no element, and neither repeats one.
pub fn assert_disjoint<const D: usize>(
    a: impl IntoIterator<Item = GridIndex<D>>,
    b: impl IntoIterator<Item = GridIndex<D>>,
) {
    let a = assert_distinct(a);
    let b = assert_distinct(b);
    if let Some(shared) = a.intersection(&b).next() {
        panic!("index {shared} appears in both sequences");
    }
}

/// `a` and `b` are disjoint and together cover exactly `domain`.
pub fn assert_partition<const D: usize>(
    a: impl IntoIterator<Item = GridIndex<D>>,
    b: impl IntoIterator<Item = GridIndex<D>>,
    domain: impl IntoIterator<Item = GridIndex<D>>,
) {
    let a = assert_distinct(a);
    let b = assert_distinct(b);
    if let Some(shared) = a.intersection(&b).next() {
        panic!("index {shared} appears in both sequences");
    }
    let domain = assert_distinct(domain);
    let union: IndexSet<GridIndex<D>> = a.union(&b).copied().collect();
    if let Some(missing) = domain.iter().find(|i| !union.contains(*i)) {
        panic!("index {missing} not covered");
    }
    if let Some(extra) = union.iter().find(|i| !domain.contains(*i)) {
        panic!("index {extra} outside the domain");
    }
}
