//! Benchmark profiles and utilities for the Strata workspace.
//!
//! Provides pre-built fields and candidate lists for benchmarking:
//!
//! - [`reference_profile`]: 128x128 sphere signed-distance image (16K cells)
//! - [`stress_profile`]: 64x64x64 sphere image (~262K cells)
//! - [`band_from_field`]: the candidate list a narrow-band pass would reuse

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{GridIndex, GridRegion, GridSize};
use strata_image::{Image, ImageError};
use strata_levelset::{ExtractError, ExtractorConfig, NeighborhoodExtractor, NodeContainer};

/// Signed distance to a sphere centred in a zero-based cube of `side`
/// cells per axis, radius a third of the side.
pub fn sphere_image<const D: usize>(side: usize) -> Result<Image<D>, ImageError> {
    let center = (side as f64 - 1.0) / 2.0;
    let radius = side as f64 / 3.0;
    let region = GridRegion::from_size(GridSize::filled(side));
    Image::from_fn(region, [1.0; D], |i: &GridIndex<D>| {
        let r2: f64 = i
            .as_array()
            .iter()
            .map(|&c| {
                let p = c as f64 - center;
                p * p
            })
            .sum();
        (r2.sqrt() - radius) as f32
    })
}

/// Reference benchmark profile: 128x128 (16K cells).
pub fn reference_profile() -> Result<Image<2>, ImageError> {
    sphere_image(128)
}

/// Stress benchmark profile: 64x64x64 (~262K cells).
pub fn stress_profile() -> Result<Image<3>, ImageError> {
    sphere_image(64)
}

/// Full-scan `field` and return the signed band of the result.
pub fn band_from_field<const D: usize>(
    field: &Image<D>,
) -> Result<NodeContainer<D>, ExtractError> {
    let mut extractor = NeighborhoodExtractor::new(ExtractorConfig::default());
    extractor.set_input_level_set(field);
    extractor.locate()?;
    Ok(extractor.signed_band())
}
