//! Level-set neighbourhood extraction.
//!
//! Given a scalar field and an iso-value, [`NeighborhoodExtractor`]
//! finds the grid points that sit next to the iso-surface and assigns
//! each a non-negative sub-pixel distance to it. Points with a field
//! value at or below the iso-value go to the *inside* container, the
//! rest to the *outside* container.
//!
//! # Distance model
//!
//! Along each axis the two face neighbours are inspected; wherever the
//! sign of `field - level` flips, the crossing is placed by linear
//! interpolation. The per-axis crossings are treated as hyperplanes and
//! combined as `sqrt(1 / Σ 1/dᵢ²)`.
//!
//! # Traversal modes
//!
//! - **Full scan**: every index of the field's buffered region, in
//!   raster order, driven by a [`RegionIndexRange`](strata_range::RegionIndexRange).
//! - **Narrow band**: only the candidates of a caller-supplied
//!   [`NodeContainer`] whose stored value lies within half the bandwidth
//!   of zero, in the order given.
//!
//! ```
//! use strata_core::{GridRegion, GridSize};
//! use strata_image::Image;
//! use strata_levelset::{ExtractorConfig, NeighborhoodExtractor};
//!
//! let field = Image::from_vec(
//!     GridRegion::from_size(GridSize::new([2])),
//!     [1.0],
//!     vec![-1.0, 1.0],
//! ).unwrap();
//! let mut extractor = NeighborhoodExtractor::new(ExtractorConfig::default());
//! extractor.set_input_level_set(&field);
//! extractor.locate().unwrap();
//! assert_eq!(extractor.inside_points()[0].value, 0.5);
//! assert_eq!(extractor.outside_points()[0].value, 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod node;
mod progress;

pub use config::{ConfigError, ExtractorConfig};
pub use error::ExtractError;
pub use extractor::NeighborhoodExtractor;
pub use node::{LevelSetNode, NodeContainer};
