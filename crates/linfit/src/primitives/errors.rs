//! Error types for aggregation and fitting.
//!
//! ## Purpose
//!
//! This module defines the error conditions raised by the crate: malformed
//! input shapes, numeric degeneracies, invalid parameters, and range queries on
//! empty series.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Immediate**: Errors are raised by the call that detects them, never later.
//! * **Derived**: `Display` and `std::error::Error` come from `thiserror`.
//!
//! ## Key concepts
//!
//! 1. **Invalid input**: Mismatched lengths, too few samples, non-finite values,
//!    bad weights, non-positive thresholds, zero spread in x.
//! 2. **Empty series**: Min/max queries on a series without points.
//! 3. **Not fitted**: Not an error. Probing residuals or intervals before a fit
//!    logs a warning and yields an empty or zero result.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Every variant except `EmptySeries` belongs to the invalid-input family.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for aggregation, series and regression operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinFitError {
    /// Input arrays are empty.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `x` and `y` arrays must have the same number of elements.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// A weight is required for every sample.
    #[error("Length mismatch: {weights_len} weights supplied for {n} points")]
    MismatchedWeights {
        /// Number of samples.
        n: usize,
        /// Number of weights supplied.
        weights_len: usize,
    },

    /// Input data contains NaN or infinite values.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Number of points is below the minimum for the requested computation.
    #[error("Too few points: got {got}, need at least {min}")]
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Proximity threshold must be positive and finite.
    #[error("Invalid grouping threshold: {0} (must be > 0 and finite)")]
    InvalidThreshold(f64),

    /// Weights must be finite, non-negative, and not all zero.
    #[error("Invalid weight at index {index}: {value} (must be >= 0 and finite)")]
    InvalidWeight {
        /// Index of the offending weight (`usize::MAX` when all weights are zero).
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// The data cannot determine the requested quantity (e.g., zero spread in x).
    #[error("Degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// A weighted fit was requested on a model built without weights.
    #[error("Weighted fit requested but the model has no weights")]
    MissingWeights,

    /// Requested number of decimal digits is outside the supported range.
    #[error("Invalid decimal digits: {got} (must be at most {max})")]
    InvalidDecimalDigits {
        /// Requested digit count.
        got: usize,
        /// Largest supported digit count.
        max: usize,
    },

    /// Range query on a series that holds no points.
    #[error("Series '{name}' has no points")]
    EmptySeries {
        /// Name of the empty series.
        name: String,
    },
}

impl LinFitError {
    /// True for every error caused by malformed input shapes or parameters.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_empty_series()
    }

    /// True when a range query hit a series without points.
    pub fn is_empty_series(&self) -> bool {
        matches!(self, Self::EmptySeries { .. })
    }
}
