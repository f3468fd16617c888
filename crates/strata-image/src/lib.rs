//! Dense N-dimensional scalar images.
//!
//! [`Image`] stores one `f32` sample per cell of a
//! [`GridRegion`](strata_core::GridRegion) in raster order (axis 0
//! fastest) together with per-axis physical spacing. It implements
//! [`ScalarField`](strata_core::ScalarField) and is the default field
//! type handed to the level-set extractors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod image;

pub use error::ImageError;
pub use image::Image;
