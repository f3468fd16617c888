//! Extractor configuration, validation, and error types.
//!
//! [`ExtractorConfig`] carries the tunables of a
//! [`NeighborhoodExtractor`](crate::NeighborhoodExtractor).
//! [`validate()`](ExtractorConfig::validate) is called at the start of
//! every locate pass, before any output is touched.

use std::error::Error;
use std::fmt;

// ── ExtractorConfig ────────────────────────────────────────────────

/// Tunables for level-set neighbourhood extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractorConfig {
    /// Iso-value defining the level set. Default: 0.0.
    pub level_set_value: f64,
    /// Restrict the pass to a caller-supplied narrow band. Default: false.
    pub narrow_banding: bool,
    /// Width of the narrow band; candidates whose stored value has
    /// magnitude above half of this are skipped. Default: 12.0.
    pub narrow_bandwidth: f64,
    /// Sentinel distance meaning "no crossing". Default: `f64::MAX`.
    pub large_value: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            level_set_value: 0.0,
            narrow_banding: false,
            narrow_bandwidth: 12.0,
            large_value: f64::MAX,
        }
    }
}

impl ExtractorConfig {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.level_set_value.is_finite() {
            return Err(ConfigError::InvalidLevelSetValue {
                value: self.level_set_value,
            });
        }
        if !self.narrow_bandwidth.is_finite() || self.narrow_bandwidth < 0.0 {
            return Err(ConfigError::InvalidBandwidth {
                value: self.narrow_bandwidth,
            });
        }
        if self.large_value.is_nan() || self.large_value <= 0.0 {
            return Err(ConfigError::InvalidLargeValue {
                value: self.large_value,
            });
        }
        Ok(())
    }

    /// Half the bandwidth: the largest admissible candidate magnitude.
    pub fn band_half_width(&self) -> f64 {
        self.narrow_bandwidth / 2.0
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`ExtractorConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The iso-value is NaN or infinite.
    InvalidLevelSetValue {
        /// The rejected value.
        value: f64,
    },
    /// The bandwidth is negative, NaN, or infinite.
    InvalidBandwidth {
        /// The rejected value.
        value: f64,
    },
    /// The sentinel is not strictly positive.
    InvalidLargeValue {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevelSetValue { value } => {
                write!(f, "level set value must be finite, got {value}")
            }
            Self::InvalidBandwidth { value } => {
                write!(f, "narrow bandwidth must be finite and >= 0, got {value}")
            }
            Self::InvalidLargeValue { value } => {
                write!(f, "large value must be > 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ExtractorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.level_set_value, 0.0);
        assert!(!cfg.narrow_banding);
        assert_eq!(cfg.narrow_bandwidth, 12.0);
        assert_eq!(cfg.large_value, f64::MAX);
        assert_eq!(cfg.band_half_width(), 6.0);
    }

    #[test]
    fn rejects_non_finite_level() {
        let cfg = ExtractorConfig {
            level_set_value: f64::NAN,
            ..ExtractorConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidLevelSetValue { .. })
        ));
    }

    #[test]
    fn rejects_bad_bandwidth() {
        for value in [-1.0, f64::NAN, f64::INFINITY] {
            let cfg = ExtractorConfig {
                narrow_bandwidth: value,
                ..ExtractorConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidBandwidth { .. })
            ));
        }
    }

    #[test]
    fn zero_bandwidth_is_allowed() {
        let cfg = ExtractorConfig {
            narrow_bandwidth: 0.0,
            ..ExtractorConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_large_value() {
        for value in [0.0, -5.0, f64::NAN] {
            let cfg = ExtractorConfig {
                large_value: value,
                ..ExtractorConfig::default()
            };
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().starts_with("large value"));
        }
    }
}
