//! Output types for linear fits.
//!
//! ## Purpose
//!
//! This module defines the `FitResult` struct, an immutable snapshot of a fitted
//! model handed to rendering and printing collaborators, together with its
//! text renderings.
//!
//! ## Design notes
//!
//! * **Snapshot**: Owns copies of everything it reports; refitting the model
//!   does not change an existing result.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` as the fitted equation.
//!
//! ## Key concepts
//!
//! * **Half-widths**: `slope_error` and `intercept_error` are confidence-interval
//!   half-widths at `confidence_level`, not standard errors.
//! * **Fixed intercept**: When the fit had no free intercept, the intercept is
//!   zero, `intercept_fixed` is set, and its interval has zero width.
//! * **Origin offsets**: Means subtracted before fitting; coefficients and
//!   residuals are expressed in the shifted coordinates.
//!
//! ## Invariants
//!
//! * `residuals.len()` equals the number of fitted samples.
//! * Error half-widths are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores and renders results.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::format::{NumberFormat, error_label, variable_name};
use crate::evaluation::intervals::ConfidenceLevel;

// ============================================================================
// Result Structure
// ============================================================================

/// Fitted line with propagated uncertainty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Confidence-interval half-width of the slope.
    pub slope_error: T,

    /// Confidence-interval half-width of the intercept.
    pub intercept_error: T,

    /// Mean of x subtracted before fitting (zero if x was not shifted).
    pub origin_offset_x: T,

    /// Mean of y subtracted before fitting (zero if y was not shifted).
    pub origin_offset_y: T,

    /// Residuals `yᵢ − (slope·xᵢ + intercept)` in fitted coordinates.
    pub residuals: Vec<T>,

    /// Coverage of the reported half-widths.
    pub confidence_level: ConfidenceLevel,

    /// Residual degrees of freedom (`n − 2`).
    pub degrees_of_freedom: usize,

    /// Whether per-sample weights were used.
    pub weighted: bool,

    /// Whether the intercept was held at zero instead of estimated.
    pub intercept_fixed: bool,

    /// Optional model name.
    pub name: Option<String>,

    /// Optional header of the independent variable.
    pub x_var: Option<String>,

    /// Optional header of the dependent variable.
    pub y_var: Option<String>,
}

impl<T: Float> FitResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Evaluate the fitted line at `x` (fitted coordinates).
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Residual sum of squares.
    pub fn residual_sum_of_squares(&self) -> T {
        self.residuals.iter().fold(T::zero(), |acc, &r| acc + r * r)
    }

    /// Slope interval as `(lower, upper)`.
    pub fn slope_interval(&self) -> (T, T) {
        (self.slope - self.slope_error, self.slope + self.slope_error)
    }

    /// Intercept interval as `(lower, upper)`.
    pub fn intercept_interval(&self) -> (T, T) {
        (
            self.intercept - self.intercept_error,
            self.intercept + self.intercept_error,
        )
    }

    /// Short uncertainty label derived from the y header.
    pub fn error_label(&self) -> String {
        error_label(self.y_var.as_deref())
    }
}

// ============================================================================
// Text Renderings
// ============================================================================

impl<T: Float + Display> FitResult<T> {
    /// Render the fitted equation, e.g. `Y = (2.00 ± 0.10) * X + (1.00 ± 0.20)`.
    ///
    /// With both headers set, the variables are named after them.
    pub fn equation(&self, format: &NumberFormat) -> String {
        let (x_name, y_name) = match (&self.x_var, &self.y_var) {
            (Some(x), Some(y)) => (variable_name(x), variable_name(y)),
            _ => ("X".to_string(), "Y".to_string()),
        };

        format!(
            "{} = ({} ± {}) * {} + ({} ± {})",
            y_name,
            format.format(self.slope),
            format.format(self.slope_error),
            x_name,
            format.format(self.intercept),
            format.format(self.intercept_error),
        )
    }

    /// Render a tab-separated summary row: name, error label, slope, slope
    /// error, intercept, intercept error, x offset, y offset.
    pub fn summary_row(&self, format: &NumberFormat) -> String {
        [
            self.name.clone().unwrap_or_default(),
            self.error_label(),
            format.format(self.slope),
            format.format(self.slope_error),
            format.format(self.intercept),
            format.format(self.intercept_error),
            format.format(self.origin_offset_x),
            format.format(self.origin_offset_y),
        ]
        .join("\t")
    }
}

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.equation(&NumberFormat::default()))
    }
}
