//! Rust iterator adapter over a pair of index cursors.

use crate::cursor::IndexCursor;
use std::iter::FusedIterator;
use strata_core::GridIndex;

/// Iterator over the indices of an [`IndexRange`](crate::IndexRange).
///
/// Consumes from the front with a forward cursor and from the back with
/// an end cursor stepped backwards, so `rev()` yields exactly the reverse
/// of the forward sequence. Both ends meet after `len()` items.
#[derive(Clone, Debug)]
pub struct Indices<'a, const D: usize> {
    front: IndexCursor<'a, D>,
    back: IndexCursor<'a, D>,
    remaining: usize,
}

impl<'a, const D: usize> Indices<'a, D> {
    pub(crate) fn new(front: IndexCursor<'a, D>, back: IndexCursor<'a, D>, len: usize) -> Self {
        Self {
            front,
            back,
            remaining: len,
        }
    }
}

impl<const D: usize> Iterator for Indices<'_, D> {
    type Item = GridIndex<D>;

    fn next(&mut self) -> Option<GridIndex<D>> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front.get();
        self.front.inc();
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const D: usize> DoubleEndedIterator for Indices<'_, D> {
    fn next_back(&mut self) -> Option<GridIndex<D>> {
        if self.remaining == 0 {
            return None;
        }
        self.back.dec();
        self.remaining -= 1;
        Some(self.back.get())
    }
}

impl<const D: usize> ExactSizeIterator for Indices<'_, D> {}

impl<const D: usize> FusedIterator for Indices<'_, D> {}
