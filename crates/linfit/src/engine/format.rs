//! Numeric formatting contract for output collaborators.
//!
//! Values are rendered with a fixed number of decimal places. The digit count
//! travels in a [`NumberFormat`] value instead of process-wide state, so two
//! reports with different precision never interfere.

// External dependencies
use core::fmt::Display;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::LinFitError;

/// Largest supported number of decimal digits.
pub const MAX_DECIMAL_DIGITS: usize = 15;

/// Fixed-point formatting of numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormat {
    decimal_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self { decimal_digits: 2 }
    }
}

impl NumberFormat {
    /// Format with `decimal_digits` places after the decimal point.
    pub fn new(decimal_digits: usize) -> Result<Self, LinFitError> {
        Validator::validate_decimal_digits(decimal_digits)?;
        Ok(Self { decimal_digits })
    }

    /// Configured number of decimal digits.
    pub fn decimal_digits(&self) -> usize {
        self.decimal_digits
    }

    /// Render `value` with the configured precision.
    pub fn format<T: Display>(&self, value: T) -> String {
        format!("{:.*}", self.decimal_digits, value)
    }
}

/// Make a header usable as an equation variable (spaces become underscores).
pub fn variable_name(header: &str) -> String {
    header.replace(' ', "_")
}

/// Short uncertainty label derived from the dependent-variable header.
///
/// Enthalpy, entropy and Gibbs-energy headers map to `dh`, `ds` and `dg`
/// (checked in that order); other headers are lower-cased as-is.
pub fn error_label(y_var: Option<&str>) -> String {
    let lowered = y_var.unwrap_or("yvar").to_lowercase();

    if lowered.contains('h') {
        "dh".to_string()
    } else if lowered.contains('s') {
        "ds".to_string()
    } else if lowered.contains('g') {
        "dg".to_string()
    } else {
        lowered
    }
}
