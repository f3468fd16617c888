//! Rectangular grid regions and their face neighbourhoods.

use crate::error::RegionError;
use crate::index::{GridIndex, GridSize};
use smallvec::SmallVec;

/// An axis-aligned rectangular block of grid cells.
///
/// Described by its start index (lowest corner, inclusive) and its
/// per-axis size. A region with any zero-sized axis contains no cells.
///
/// # Examples
///
/// ```
/// use strata_core::{GridIndex, GridRegion, GridSize};
///
/// let region = GridRegion::new(GridIndex::new([1, 1]), GridSize::new([2, 3]));
/// assert_eq!(region.cell_count(), 6);
/// assert!(region.is_inside(&GridIndex::new([2, 3])));
/// assert!(!region.is_inside(&GridIndex::new([3, 3])));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct GridRegion<const D: usize> {
    index: GridIndex<D>,
    size: GridSize<D>,
}

/// A cell one step away from a centre cell along a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceNeighbour<const D: usize> {
    /// Axis along which the neighbour lies.
    pub axis: usize,
    /// `-1` or `+1`.
    pub step: i64,
    /// Index of the neighbouring cell.
    pub index: GridIndex<D>,
}

impl<const D: usize> GridRegion<D> {
    /// Create a region from its start index and size.
    pub const fn new(index: GridIndex<D>, size: GridSize<D>) -> Self {
        Self { index, size }
    }

    /// A region starting at the origin.
    pub const fn from_size(size: GridSize<D>) -> Self {
        Self {
            index: GridIndex::zero(),
            size,
        }
    }

    /// Start (lowest) index.
    pub fn index(&self) -> GridIndex<D> {
        self.index
    }

    /// Per-axis size.
    pub fn size(&self) -> GridSize<D> {
        self.size
    }

    /// Highest index inside the region, `index + size - 1` per axis.
    ///
    /// Meaningless for empty regions.
    pub fn upper_index(&self) -> GridIndex<D> {
        let mut upper = self.index;
        for axis in 0..D {
            upper[axis] += self.size[axis] as i64 - 1;
        }
        upper
    }

    /// Number of cells in the region.
    pub fn cell_count(&self) -> usize {
        self.size.cell_count()
    }

    /// `true` if the region contains no cells.
    pub fn is_empty(&self) -> bool {
        self.size.has_zero_extent()
    }

    /// Whether `index` lies inside the region.
    pub fn is_inside(&self, index: &GridIndex<D>) -> bool {
        (0..D).all(|axis| {
            let lo = self.index[axis];
            index[axis] >= lo && index[axis] < lo + self.size[axis] as i64
        })
    }

    /// Like [`is_inside`](Self::is_inside), but reports the failure.
    pub fn check_inside(&self, index: &GridIndex<D>) -> Result<(), RegionError> {
        if self.is_inside(index) {
            Ok(())
        } else {
            Err(RegionError::IndexOutOfBounds {
                index: index.0.to_vec(),
                bounds: self.describe_bounds(),
            })
        }
    }

    /// Raster-order position of `index` within the region (axis 0 fastest).
    ///
    /// Returns `None` when the index lies outside.
    pub fn linear_offset(&self, index: &GridIndex<D>) -> Option<usize> {
        if !self.is_inside(index) {
            return None;
        }
        let mut offset = 0usize;
        let mut stride = 1usize;
        for axis in 0..D {
            offset += (index[axis] - self.index[axis]) as usize * stride;
            stride *= self.size[axis];
        }
        Some(offset)
    }

    /// In-region neighbours one step away along a single axis.
    ///
    /// Ordered by axis, the `-1` side before the `+1` side. Cells outside
    /// the region are omitted, so border cells have fewer neighbours.
    /// The inline capacity covers every dimension up to 4 without
    /// touching the heap.
    pub fn face_neighbours(&self, index: &GridIndex<D>) -> SmallVec<[FaceNeighbour<D>; 8]> {
        let mut out = SmallVec::new();
        for axis in 0..D {
            for step in [-1i64, 1] {
                let neighbour = index.offset_axis(axis, step);
                if self.is_inside(&neighbour) {
                    out.push(FaceNeighbour {
                        axis,
                        step,
                        index: neighbour,
                    });
                }
            }
        }
        out
    }

    fn describe_bounds(&self) -> String {
        let axes: Vec<String> = (0..D)
            .map(|axis| {
                let lo = self.index[axis];
                format!("[{}, {})", lo, lo + self.size[axis] as i64)
            })
            .collect();
        axes.join(" x ")
    }
}
