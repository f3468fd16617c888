//! Strata: N-dimensional index ranges and level-set neighbourhood extraction.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A 2-D field whose zero level set is the vertical line x = 1.5.
//! let region = GridRegion::from_size(GridSize::new([4, 3]));
//! let field = Image::from_fn(region, [1.0, 1.0], |i| i[0] as f32 - 1.5).unwrap();
//!
//! let mut extractor = NeighborhoodExtractor::new(ExtractorConfig::default());
//! extractor.set_input_level_set(&field);
//! extractor.locate().unwrap();
//!
//! // Column 1 sits just inside, column 2 just outside.
//! assert_eq!(extractor.inside_points().len(), 3);
//! assert!(extractor.inside_points().iter().all(|n| n.index[0] == 1 && n.value == 0.5));
//! assert!(extractor.outside_points().iter().all(|n| n.index[0] == 2));
//!
//! // Raster-order traversal of the same region.
//! let order: Vec<_> = RegionIndexRange::from_region(&region).iter().take(3).collect();
//! assert_eq!(order[2], GridIndex::new([2, 0]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Indices, sizes, regions, field and progress traits |
//! | [`range`] | `strata-range` | Index ranges, cursors, and iterators |
//! | [`image`] | `strata-image` | Dense scalar images |
//! | [`levelset`] | `strata-levelset` | Level-set neighbourhood extraction |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid vocabulary and traits (`strata-core`).
///
/// Contains [`types::GridIndex`], [`types::GridRegion`], and the
/// [`types::ScalarField`] capability trait.
pub use strata_core as types;

/// Bidirectional N-d index ranges (`strata-range`).
pub use strata_range as range;

/// Dense images (`strata-image`).
pub use strata_image as image;

/// Level-set neighbourhood extraction (`strata-levelset`).
///
/// [`levelset::NeighborhoodExtractor`] runs full or narrow-band passes
/// over any [`types::ScalarField`].
pub use strata_levelset as levelset;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Grid vocabulary
    pub use strata_core::{
        GridIndex, GridRegion, GridSize, NoProgress, ProgressSink, ScalarField,
    };

    // Ranges
    pub use strata_range::{IndexRange, RegionIndexRange, ZeroBasedIndexRange};

    // Images
    pub use strata_image::{Image, ImageError};

    // Extraction
    pub use strata_levelset::{
        ExtractError, ExtractorConfig, LevelSetNode, NeighborhoodExtractor, NodeContainer,
    };
}
