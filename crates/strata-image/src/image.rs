//! The dense [`Image`] type.

use crate::error::ImageError;
use strata_core::{GridIndex, GridRegion, ScalarField};
use strata_range::RegionIndexRange;

/// A dense scalar image over a grid region.
///
/// Samples are stored as `f32` in raster order: the sample for index `i`
/// lives at `region.linear_offset(i)`. Spacing is the physical distance
/// between neighbouring samples along each axis and is always finite and
/// strictly positive.
///
/// # Examples
///
/// ```
/// use strata_core::{GridIndex, GridRegion, GridSize, ScalarField};
/// use strata_image::Image;
///
/// let region = GridRegion::from_size(GridSize::new([3, 2]));
/// let img = Image::from_fn(region, [0.5, 2.0], |i| (i[0] + 10 * i[1]) as f32).unwrap();
/// assert_eq!(img.get(&GridIndex::new([2, 1])), Some(12.0));
/// assert_eq!(img.spacing(1), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Image<const D: usize> {
    region: GridRegion<D>,
    indices: RegionIndexRange<D>,
    spacing: [f64; D],
    data: Vec<f32>,
}

impl<const D: usize> Image<D> {
    /// A zero-filled image.
    pub fn new(region: GridRegion<D>, spacing: [f64; D]) -> Result<Self, ImageError> {
        Self::from_vec(region, spacing, vec![0.0; region.cell_count()])
    }

    /// Wrap an existing raster-ordered buffer.
    ///
    /// Fails if `data.len()` differs from the region's cell count or any
    /// spacing component is not finite and positive.
    pub fn from_vec(
        region: GridRegion<D>,
        spacing: [f64; D],
        data: Vec<f32>,
    ) -> Result<Self, ImageError> {
        validate_spacing(&spacing)?;
        if data.len() != region.cell_count() {
            return Err(ImageError::BufferSizeMismatch {
                actual: data.len(),
                expected: region.cell_count(),
            });
        }
        Ok(Self {
            region,
            indices: RegionIndexRange::from_region(&region),
            spacing,
            data,
        })
    }

    /// Fill an image by evaluating `f` at every index, in raster order.
    pub fn from_fn(
        region: GridRegion<D>,
        spacing: [f64; D],
        mut f: impl FnMut(&GridIndex<D>) -> f32,
    ) -> Result<Self, ImageError> {
        let data = RegionIndexRange::from_region(&region)
            .iter()
            .map(|index| f(&index))
            .collect();
        Self::from_vec(region, spacing, data)
    }

    /// The region covered by the image.
    pub fn region(&self) -> GridRegion<D> {
        self.region
    }

    /// Per-axis physical spacing.
    pub fn spacings(&self) -> [f64; D] {
        self.spacing
    }

    /// Position of `index` in the sample buffer.
    pub fn offset_of(&self, index: &GridIndex<D>) -> Option<usize> {
        self.region.linear_offset(index)
    }

    /// Sample at `index`, or `None` outside the region.
    pub fn get(&self, index: &GridIndex<D>) -> Option<f32> {
        self.offset_of(index).map(|offset| self.data[offset])
    }

    /// Overwrite the sample at `index`.
    pub fn set(&mut self, index: &GridIndex<D>, value: f32) -> Result<(), ImageError> {
        self.region.check_inside(index)?;
        if let Some(offset) = self.offset_of(index) {
            self.data[offset] = value;
        }
        Ok(())
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// The raw raster-ordered samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate `(index, sample)` pairs in raster order.
    pub fn indexed(&self) -> impl Iterator<Item = (GridIndex<D>, f32)> + '_ {
        self.indices.iter().zip(self.data.iter().copied())
    }
}

impl<const D: usize> ScalarField<D> for Image<D> {
    fn spacing(&self, axis: usize) -> f64 {
        self.spacing[axis]
    }

    fn pixel(&self, index: &GridIndex<D>) -> f64 {
        match self.offset_of(index) {
            Some(offset) => f64::from(self.data[offset]),
            None => panic!("pixel {index} outside buffered region {:?}", self.region),
        }
    }

    fn buffered_region(&self) -> GridRegion<D> {
        self.region
    }

    fn is_in_buffered_region(&self, index: &GridIndex<D>) -> bool {
        self.region.is_inside(index)
    }
}

fn validate_spacing<const D: usize>(spacing: &[f64; D]) -> Result<(), ImageError> {
    for (axis, &value) in spacing.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(ImageError::InvalidSpacing { axis, value });
        }
    }
    Ok(())
}
