//! Analytic image fixtures with known level sets.
//!
//! - [`ramp`]: linear in axis 0, crossing zero at a chosen position.
//! - [`sphere`]: signed distance to a sphere, negative inside.
//! - [`constant`]: one value everywhere (no crossings).
//! - [`checkerboard`]: alternating `-1` / `+1`, every cell next to a crossing.

use strata_core::{GridIndex, GridRegion, GridSize};
use strata_image::Image;

fn zero_based<const D: usize>(size: [usize; D]) -> GridRegion<D> {
    GridRegion::from_size(GridSize::new(size))
}

fn build<const D: usize>(
    size: [usize; D],
    spacing: [f64; D],
    f: impl FnMut(&GridIndex<D>) -> f32,
) -> Image<D> {
    Image::from_fn(zero_based(size), spacing, f).expect("fixture parameters are valid")
}

/// `value(i) = (i[0] - crossing) * slope`, unit spacing.
pub fn ramp<const D: usize>(size: [usize; D], crossing: f64, slope: f64) -> Image<D> {
    build(size, [1.0; D], |i| ((i[0] as f64 - crossing) * slope) as f32)
}

/// Signed Euclidean distance to a sphere of `radius` around `center`,
/// measured in physical units with the given spacing.
pub fn sphere<const D: usize>(
    size: [usize; D],
    spacing: [f64; D],
    center: [f64; D],
    radius: f64,
) -> Image<D> {
    build(size, spacing, |i| {
        let r2: f64 = (0..D)
            .map(|a| {
                let p = i[a] as f64 * spacing[a] - center[a];
                p * p
            })
            .sum();
        (r2.sqrt() - radius) as f32
    })
}

/// `value` at every index.
pub fn constant<const D: usize>(size: [usize; D], value: f32) -> Image<D> {
    build(size, [1.0; D], |_| value)
}

/// `-1` where the index sum is even, `+1` where it is odd.
pub fn checkerboard<const D: usize>(size: [usize; D]) -> Image<D> {
    build(size, [1.0; D], |i| {
        if i.as_array().iter().sum::<i64>().rem_euclid(2) == 0 {
            -1.0
        } else {
            1.0
        }
    })
}
