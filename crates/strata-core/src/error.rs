//! Error types for grid geometry queries.

use std::error::Error;
use std::fmt;

/// Errors arising from index/region queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionError {
    /// An index lies outside the region being addressed.
    IndexOutOfBounds {
        /// The offending index components.
        index: Vec<i64>,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, bounds } => {
                write!(f, "index {index:?} out of bounds: {bounds}")
            }
        }
    }
}

impl Error for RegionError {}
