//! Fixed-dimension grid indices and sizes.

use std::cmp::Ordering;
use std::fmt;
use std::ops;

/// A discrete coordinate on an N-dimensional grid.
///
/// Equality is component-wise. Ordering is lexicographic starting from the
/// *last* axis, so sorting a set of indices yields raster order (axis 0
/// varies fastest, axis `D - 1` slowest).
///
/// # Examples
///
/// ```
/// use strata_core::GridIndex;
///
/// let a = GridIndex::new([1, 0]);
/// let b = GridIndex::new([0, 1]);
/// // Axis 1 dominates the comparison.
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex<const D: usize>(pub [i64; D]);

impl<const D: usize> GridIndex<D> {
    /// Create an index from its components.
    pub const fn new(components: [i64; D]) -> Self {
        Self(components)
    }

    /// An index with every component set to `value`.
    pub const fn filled(value: i64) -> Self {
        Self([value; D])
    }

    /// The origin `(0, ..., 0)`.
    pub const fn zero() -> Self {
        Self([0; D])
    }

    /// The components as a fixed-size array.
    pub fn as_array(&self) -> &[i64; D] {
        &self.0
    }

    /// Copy of this index with `axis` moved by `delta`.
    pub fn offset_axis(&self, axis: usize, delta: i64) -> Self {
        let mut out = *self;
        out.0[axis] += delta;
        out
    }
}

impl<const D: usize> Default for GridIndex<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> From<[i64; D]> for GridIndex<D> {
    fn from(components: [i64; D]) -> Self {
        Self(components)
    }
}

impl<const D: usize> ops::Index<usize> for GridIndex<D> {
    type Output = i64;

    fn index(&self, axis: usize) -> &i64 {
        &self.0[axis]
    }
}

impl<const D: usize> ops::IndexMut<usize> for GridIndex<D> {
    fn index_mut(&mut self, axis: usize) -> &mut i64 {
        &mut self.0[axis]
    }
}

impl<const D: usize> Ord for GridIndex<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        for axis in (0..D).rev() {
            match self.0[axis].cmp(&other.0[axis]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl<const D: usize> PartialOrd for GridIndex<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const D: usize> fmt::Debug for GridIndex<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl<const D: usize> fmt::Display for GridIndex<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (axis, value) in self.0.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Per-axis extent of a grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize<const D: usize>(pub [usize; D]);

impl<const D: usize> GridSize<D> {
    /// Create a size from its per-axis extents.
    pub const fn new(extents: [usize; D]) -> Self {
        Self(extents)
    }

    /// A size with every axis set to `extent`.
    pub const fn filled(extent: usize) -> Self {
        Self([extent; D])
    }

    /// Number of cells spanned: the product of all axis extents.
    pub fn cell_count(&self) -> usize {
        self.0.iter().product()
    }

    /// `true` if any axis has zero extent.
    pub fn has_zero_extent(&self) -> bool {
        self.0.contains(&0)
    }
}

impl<const D: usize> Default for GridSize<D> {
    fn default() -> Self {
        Self([0; D])
    }
}

impl<const D: usize> From<[usize; D]> for GridSize<D> {
    fn from(extents: [usize; D]) -> Self {
        Self(extents)
    }
}

impl<const D: usize> ops::Index<usize> for GridSize<D> {
    type Output = usize;

    fn index(&self, axis: usize) -> &usize {
        &self.0[axis]
    }
}
