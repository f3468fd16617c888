//! Errors raised by a locate pass.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Why a locate pass was refused.
///
/// Every variant is raised before the output containers are reset, so
/// the results of the previous pass survive a failed call.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtractError {
    /// No input level set was supplied.
    MissingLevelSet,
    /// Narrow banding is on but no narrow band was supplied.
    MissingNarrowBand,
    /// The configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLevelSet => write!(f, "input level set is not set"),
            Self::MissingNarrowBand => {
                write!(f, "narrow banding is on but no input narrow band is set")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ExtractError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
