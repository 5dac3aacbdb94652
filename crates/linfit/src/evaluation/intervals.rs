//! Confidence intervals for the slope and intercept of a fitted line.
//!
//! ## Purpose
//!
//! This module quantifies the uncertainty of a least-squares line through the
//! standard errors of its coefficients and Student-t multipliers.
//!
//! ## Design notes
//!
//! * **Residual-based**: Standard errors come from the residual sum of squares
//!   with `n − 2` degrees of freedom.
//! * **Discrete levels**: Coverage is one of four named levels rather than an
//!   arbitrary probability.
//! * **Two-sided**: The t-quantile is taken at `1 − α/2`.
//!
//! ## Key concepts
//!
//! * `SSR = Σ rᵢ²`, `SSX = Σ (xᵢ − x̄)²`
//! * `SE_slope = sqrt(SSR / (n − 2) / SSX)`
//! * `SE_intercept = SE_slope · sqrt(Σ xᵢ² / n)`
//! * Half-width = `SE × t(1 − α/2, n − 2)`
//!
//! ## Invariants
//!
//! * Standard errors and half-widths are non-negative.
//! * Wider coverage never yields a narrower interval for the same data.
//!
//! ## Non-goals
//!
//! * This module does not fit the line.
//! * This module does not compute prediction bands for new observations.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{count, sum_of_squares, sum_squared_deviation};
use crate::math::student_t;
use crate::primitives::errors::LinFitError;

// ============================================================================
// Confidence Level
// ============================================================================

/// Coverage of a reported interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfidenceLevel {
    /// 99% two-sided.
    CL99,

    /// 95% two-sided (default).
    #[default]
    CL95,

    /// One standard deviation, about 68.3% two-sided.
    StandardDeviation,

    /// 50% two-sided.
    CL50,
}

impl ConfidenceLevel {
    /// All levels, widest first.
    pub const ALL: [Self; 4] = [Self::CL99, Self::CL95, Self::StandardDeviation, Self::CL50];

    /// Probability mass the interval covers.
    pub fn confidence(self) -> f64 {
        match self {
            Self::CL99 => 0.99,
            Self::CL95 => 0.95,
            Self::StandardDeviation => 0.683,
            Self::CL50 => 0.5,
        }
    }

    /// Two-sided significance `α = 1 − confidence`.
    pub fn alpha(self) -> f64 {
        1.0 - self.confidence()
    }

    /// Cumulative probability at which the t-quantile is taken: `1 − α/2`.
    pub fn quantile(self) -> f64 {
        1.0 - self.alpha() / 2.0
    }

    /// Create from u8 flag for compatibility with index-based selectors.
    #[inline]
    pub fn from_u8(flag: u8) -> Self {
        match flag {
            0 => Self::CL99,
            1 => Self::CL95,
            2 => Self::StandardDeviation,
            3 => Self::CL50,
            _ => Self::CL95,
        }
    }

    /// Convert to u8 flag.
    #[inline]
    pub fn to_u8(self) -> u8 {
        match self {
            Self::CL99 => 0,
            Self::CL95 => 1,
            Self::StandardDeviation => 2,
            Self::CL50 => 3,
        }
    }
}

impl Display for ConfidenceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::CL99 => write!(f, "99%"),
            Self::CL95 => write!(f, "95%"),
            Self::StandardDeviation => write!(f, "1σ (68.3%)"),
            Self::CL50 => write!(f, "50%"),
        }
    }
}

// ============================================================================
// Standard Errors
// ============================================================================

/// Standard errors of the fitted coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardErrors<T> {
    /// Standard error of the slope.
    pub slope: T,

    /// Standard error of the intercept.
    pub intercept: T,
}

impl<T: Float> StandardErrors<T> {
    /// Zero errors, reported for models that are not fitted.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
        }
    }

    /// Compute standard errors from the fitted x-values and residuals.
    pub fn compute(x: &[T], residuals: &[T]) -> Result<Self, LinFitError> {
        let n = x.len();
        if n < 3 {
            return Err(LinFitError::TooFewPoints { got: n, min: 3 });
        }
        if residuals.len() != n {
            return Err(LinFitError::MismatchedInputs {
                x_len: n,
                y_len: residuals.len(),
            });
        }

        let ssr = sum_of_squares(residuals);
        let ssx = sum_squared_deviation(x);
        if !(ssx > T::zero()) {
            return Err(LinFitError::DegenerateInput(
                "x values have zero spread; slope error is undefined",
            ));
        }

        let slope = (ssr / count(n - 2) / ssx).sqrt();
        let intercept = slope * (sum_of_squares(x) / count(n)).sqrt();

        Ok(Self { slope, intercept })
    }
}

// ============================================================================
// t-Statistic
// ============================================================================

/// Residual degrees of freedom for a line fitted to `n` samples.
#[inline]
pub fn degrees_of_freedom(n: usize) -> usize {
    n.saturating_sub(2)
}

/// Two-sided Student-t multiplier for `level` with `df` degrees of freedom.
pub fn t_statistic<T: Float>(level: ConfidenceLevel, df: usize) -> Result<T, LinFitError> {
    if df < 1 {
        return Err(LinFitError::TooFewPoints {
            got: df + 2,
            min: 3,
        });
    }

    let t = student_t::quantile(level.quantile(), df as f64).ok_or_else(|| {
        LinFitError::InvalidInput(format!(
            "t-quantile undefined at p={} with {} degrees of freedom",
            level.quantile(),
            df
        ))
    })?;

    T::from(t).ok_or_else(|| {
        LinFitError::InvalidNumericValue(format!("t-statistic {t} is not representable"))
    })
}

// ============================================================================
// Confidence Interval
// ============================================================================

/// Half-widths of the confidence intervals on slope and intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval<T> {
    /// Half-width of the slope interval.
    pub slope: T,

    /// Half-width of the intercept interval.
    pub intercept: T,

    /// Coverage these half-widths correspond to.
    pub level: ConfidenceLevel,
}

impl<T: Float> ConfidenceInterval<T> {
    /// Zero-width interval, reported for models that are not fitted.
    pub fn zero(level: ConfidenceLevel) -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            level,
        }
    }

    /// Scale standard errors by the t-multiplier for `level`.
    pub fn from_standard_errors(
        errors: StandardErrors<T>,
        df: usize,
        level: ConfidenceLevel,
    ) -> Result<Self, LinFitError> {
        let t: T = t_statistic(level, df)?;
        Ok(Self {
            slope: errors.slope * t,
            intercept: errors.intercept * t,
            level,
        })
    }
}
