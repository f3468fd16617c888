//! Image-specific error types.

use std::error::Error;
use std::fmt;

use strata_core::RegionError;

/// Errors that can occur while building or writing an image.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageError {
    /// The supplied buffer does not hold one sample per region cell.
    BufferSizeMismatch {
        /// Number of samples supplied.
        actual: usize,
        /// Number of cells in the region.
        expected: usize,
    },
    /// A spacing component is zero, negative, or not finite.
    InvalidSpacing {
        /// Axis carrying the bad value.
        axis: usize,
        /// The rejected spacing.
        value: f64,
    },
    /// An index fell outside the image region.
    Region(RegionError),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferSizeMismatch { actual, expected } => {
                write!(
                    f,
                    "buffer holds {actual} samples, region has {expected} cells"
                )
            }
            Self::InvalidSpacing { axis, value } => {
                write!(
                    f,
                    "spacing on axis {axis} must be finite and positive, got {value}"
                )
            }
            Self::Region(e) => write!(f, "region: {e}"),
        }
    }
}

impl Error for ImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RegionError> for ImageError {
    fn from(e: RegionError) -> Self {
        Self::Region(e)
    }
}
