//! Input validation for model construction and configuration.
//!
//! ## Purpose
//!
//! This module checks sample arrays, weights and formatting parameters before
//! any state is created from them, so a failed construction leaves nothing
//! half-built behind.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape**: `x`, `y` and optional weights have equal lengths.
//! * **Degrees of freedom**: At least 3 samples, so `n − 2 >= 1`.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::format::MAX_DECIMAL_DIGITS;
use crate::primitives::errors::LinFitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for model inputs and configuration.
///
/// Provides static methods returning `Result<(), LinFitError>` that fail fast
/// on the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of samples: the confidence interval needs `n − 2 >= 1`.
    pub const MIN_POINTS: usize = 3;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate paired sample arrays for fitting.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), LinFitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() && y.is_empty() {
            return Err(LinFitError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(LinFitError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Enough points for a confidence interval
        if n < Self::MIN_POINTS {
            return Err(LinFitError::TooFewPoints {
                got: n,
                min: Self::MIN_POINTS,
            });
        }

        // Check 4: All values finite
        Self::validate_finite(x, "x")?;
        Self::validate_finite(y, "y")
    }

    /// Validate that every value in `values` is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), LinFitError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(i) => Err(LinFitError::InvalidNumericValue(format!(
                "{}[{}]={}",
                name,
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(()),
        }
    }

    /// Validate per-sample weights for `n` samples.
    pub fn validate_weights<T: Float>(weights: &[T], n: usize) -> Result<(), LinFitError> {
        if weights.len() != n {
            return Err(LinFitError::MismatchedWeights {
                n,
                weights_len: weights.len(),
            });
        }

        if let Some(index) = weights
            .iter()
            .position(|w| !w.is_finite() || *w < T::zero())
        {
            return Err(LinFitError::InvalidWeight {
                index,
                value: weights[index].to_f64().unwrap_or(f64::NAN),
            });
        }

        if weights.iter().all(|w| *w == T::zero()) {
            return Err(LinFitError::InvalidWeight {
                index: usize::MAX,
                value: 0.0,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of decimal digits used when formatting values.
    pub fn validate_decimal_digits(digits: usize) -> Result<(), LinFitError> {
        if digits > MAX_DECIMAL_DIGITS {
            return Err(LinFitError::InvalidDecimalDigits {
                got: digits,
                max: MAX_DECIMAL_DIGITS,
            });
        }
        Ok(())
    }
}
