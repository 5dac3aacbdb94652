//! Fit configuration.
//!
//! Everything a fit-and-report call needs beyond the data lives here and is
//! passed explicitly: the confidence level, whether to use the model's weights,
//! and the numeric format for rendered output.

// Internal dependencies
use crate::engine::format::NumberFormat;
use crate::evaluation::intervals::ConfidenceLevel;
use crate::primitives::errors::LinFitError;

/// Configuration for `LinearModel::fit_with`.
///
/// # Example
/// ```
/// use linfit::prelude::*;
///
/// let config = FitConfig::default();
/// assert_eq!(config.confidence_level, CL95);
/// assert!(!config.weighted);
/// assert_eq!(config.format.decimal_digits(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitConfig {
    /// Coverage of the reported slope and intercept intervals.
    pub confidence_level: ConfidenceLevel,

    /// Fit with the model's per-sample weights.
    pub weighted: bool,

    /// Formatting of rendered values.
    pub format: NumberFormat,
}

impl FitConfig {
    /// Weighted fit at the default 95% level.
    pub fn weighted() -> Self {
        Self {
            weighted: true,
            ..Self::default()
        }
    }

    /// Unweighted fit reporting 99% intervals.
    pub fn strict() -> Self {
        Self {
            confidence_level: ConfidenceLevel::CL99,
            ..Self::default()
        }
    }

    /// Replace the confidence level.
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.confidence_level = level;
        self
    }

    /// Replace the number of decimal digits used in rendered output.
    pub fn with_decimal_digits(mut self, digits: usize) -> Result<Self, LinFitError> {
        self.format = NumberFormat::new(digits)?;
        Ok(self)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), LinFitError> {
        NumberFormat::new(self.format.decimal_digits()).map(|_| ())
    }
}
