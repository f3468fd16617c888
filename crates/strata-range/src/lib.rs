//! Allocation-free index ranges over N-dimensional grids.
//!
//! An [`IndexRange`] represents every integer index inside an
//! axis-aligned extent. It stores only its inclusive `(min, max)` bounds;
//! iteration produces indices on the fly in raster order (axis 0 varies
//! fastest, the last axis slowest).
//!
//! Two flavours are provided:
//!
//! - [`ZeroBasedIndexRange`]: always starts at the origin. Only a size
//!   can be supplied.
//! - [`RegionIndexRange`]: starts at an arbitrary index, typically the
//!   start of a [`GridRegion`](strata_core::GridRegion).
//!
//! # Cursors and iterators
//!
//! [`IndexCursor`] is the low-level bidirectional position, with
//! `begin()`/`end()` sentinels and carrying `inc()`/`dec()`. A cursor
//! borrows the bounds of the range it came from, so it cannot outlive
//! that range. [`ReverseCursor`] walks the same positions backwards.
//! For ordinary use, [`Indices`] wraps a pair of cursors as a
//! `DoubleEndedIterator + ExactSizeIterator`.
//!
//! ```
//! use strata_core::{GridIndex, GridSize};
//! use strata_range::ZeroBasedIndexRange;
//!
//! let range = ZeroBasedIndexRange::new(GridSize::new([2, 3]));
//! let order: Vec<[i64; 2]> = range.iter().map(|i| i.0).collect();
//! assert_eq!(order, vec![[0, 0], [1, 0], [0, 1], [1, 1], [0, 2], [1, 2]]);
//! assert_eq!(range.iter().rev().next(), Some(GridIndex::new([1, 2])));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod iter;
pub mod range;

#[cfg(test)]
pub(crate) mod compliance;

pub use cursor::{Bounds, IndexCursor, ReverseCursor};
pub use iter::Indices;
pub use range::{IndexRange, RegionIndexRange, ZeroBasedIndexRange};
