//! The [`IndexRange`] type and its zero-based / region-based aliases.

use crate::cursor::{Bounds, IndexCursor, ReverseCursor};
use crate::iter::Indices;
use strata_core::{GridIndex, GridRegion, GridSize};

/// Every integer index inside a rectangular grid extent.
///
/// Stores only the inclusive `(min, max)` bounds: construction, `len`,
/// `is_empty`, `begin` and `end` never allocate. When `ZERO_BASED` is
/// `true` the minimum is always the origin and only the size-based
/// constructor is available; the region-based constructors exist only on
/// [`RegionIndexRange`].
///
/// Any zero-length axis collapses the whole range to the canonical empty
/// range, in which every axis has `max = min - 1`.
///
/// # Examples
///
/// ```
/// use strata_core::{GridIndex, GridRegion, GridSize};
/// use strata_range::RegionIndexRange;
///
/// let region = GridRegion::new(GridIndex::new([10, 20]), GridSize::new([2, 2]));
/// let range = RegionIndexRange::from_region(&region);
/// assert_eq!(range.len(), 4);
/// assert_eq!(range.iter().next(), Some(GridIndex::new([10, 20])));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange<const D: usize, const ZERO_BASED: bool> {
    bounds: Bounds<D>,
}

/// A range that always starts at the origin.
pub type ZeroBasedIndexRange<const D: usize> = IndexRange<D, true>;

/// A range with an arbitrary start index, e.g. an image region.
pub type RegionIndexRange<const D: usize> = IndexRange<D, false>;

impl<const D: usize, const ZERO_BASED: bool> IndexRange<D, ZERO_BASED> {
    /// A range of `size` indices starting at the origin.
    pub fn new(size: GridSize<D>) -> Self {
        Self::from_min_and_size(GridIndex::zero(), size)
    }

    fn from_min_and_size(min: GridIndex<D>, size: GridSize<D>) -> Self {
        const { assert!(D > 0, "an index range needs at least one dimension") };
        // Any zero-length axis empties every axis, so the axis-0 emptiness
        // check stays valid.
        let normalized = if size.has_zero_extent() {
            GridSize::filled(0)
        } else {
            size
        };
        let mut max = min;
        for axis in 0..D {
            max[axis] = min[axis] + normalized[axis] as i64 - 1;
        }
        Self {
            bounds: Bounds { min, max },
        }
    }

    /// Lowest index (inclusive).
    pub fn min_index(&self) -> GridIndex<D> {
        self.bounds.min
    }

    /// Highest index (inclusive). Below `min_index` on every axis when
    /// the range is empty.
    pub fn max_index(&self) -> GridIndex<D> {
        self.bounds.max
    }

    /// The bounds shared by every cursor of this range.
    pub fn bounds(&self) -> &Bounds<D> {
        &self.bounds
    }

    /// Cursor at the first index.
    pub fn begin(&self) -> IndexCursor<'_, D> {
        IndexCursor::new(self.bounds.min, &self.bounds)
    }

    /// The one-past-the-end sentinel: the minimum index with the last
    /// axis set one beyond its maximum.
    ///
    /// Only meaningful for comparison; its index lies outside the range.
    pub fn end(&self) -> IndexCursor<'_, D> {
        let mut index = self.bounds.min;
        index[D - 1] = self.bounds.max[D - 1] + 1;
        IndexCursor::new(index, &self.bounds)
    }

    /// Reverse cursor at the last index.
    pub fn rbegin(&self) -> ReverseCursor<'_, D> {
        ReverseCursor::new(self.end())
    }

    /// Reverse one-past-the-end sentinel.
    pub fn rend(&self) -> ReverseCursor<'_, D> {
        ReverseCursor::new(self.begin())
    }

    /// Cursor positioned at `index`, or `None` if it lies outside.
    pub fn cursor_at(&self, index: GridIndex<D>) -> Option<IndexCursor<'_, D>> {
        self.contains(&index)
            .then_some(IndexCursor::new(index, &self.bounds))
    }

    /// Whether `index` is one of the indices of this range.
    pub fn contains(&self, index: &GridIndex<D>) -> bool {
        (0..D).all(|axis| {
            self.bounds.min[axis] <= index[axis] && index[axis] <= self.bounds.max[axis]
        })
    }

    /// Number of indices in the range.
    pub fn len(&self) -> usize {
        let mut count = 1usize;
        for axis in 0..D {
            count *= (self.bounds.max[axis] + 1 - self.bounds.min[axis]) as usize;
        }
        count
    }

    /// `true` if the range has no indices.
    pub fn is_empty(&self) -> bool {
        self.bounds.max[0] < self.bounds.min[0]
    }

    /// Iterate every index in raster order.
    pub fn iter(&self) -> Indices<'_, D> {
        Indices::new(self.begin(), self.end(), self.len())
    }
}

impl<const D: usize> IndexRange<D, false> {
    /// A range of `size` indices starting at `min`.
    pub fn with_min(min: GridIndex<D>, size: GridSize<D>) -> Self {
        Self::from_min_and_size(min, size)
    }

    /// The indices of an image region.
    pub fn from_region(region: &GridRegion<D>) -> Self {
        Self::from_min_and_size(region.index(), region.size())
    }
}

impl<const D: usize, const ZERO_BASED: bool> Default for IndexRange<D, ZERO_BASED> {
    /// The canonical empty range.
    fn default() -> Self {
        Self::new(GridSize::filled(0))
    }
}

impl<const D: usize> From<GridRegion<D>> for IndexRange<D, false> {
    fn from(region: GridRegion<D>) -> Self {
        Self::from_region(&region)
    }
}

impl<'a, const D: usize, const ZERO_BASED: bool> IntoIterator for &'a IndexRange<D, ZERO_BASED> {
    type Item = GridIndex<D>;
    type IntoIter = Indices<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
