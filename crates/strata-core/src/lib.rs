//! Core types and traits for the Strata imaging toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every traversal algorithm in the workspace:
//! fixed-dimension grid indices and sizes, rectangular grid regions,
//! the [`ScalarField`] capability trait, and the [`ProgressSink`]
//! notification trait.
//!
//! The dimension `D` is a const generic throughout, so a 2-D index can
//! never be handed to a 3-D field.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod index;
pub mod region;

pub use error::RegionError;
pub use field::{NoProgress, ProgressSink, ScalarField};
pub use index::{GridIndex, GridSize};
pub use region::{FaceNeighbour, GridRegion};
