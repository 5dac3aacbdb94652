//! Linear model with propagated uncertainty.
//!
//! ## Purpose
//!
//! This module provides [`LinearModel`], which fits `y = slope·x + intercept`
//! to paired samples (optionally weighted) and reports confidence intervals for
//! both coefficients.
//!
//! ## Design notes
//!
//! * **Validated construction**: Inputs are checked before anything is copied;
//!   a failed constructor leaves no state behind.
//! * **Owned data**: The model owns its arrays; origin shifts rewrite them.
//! * **Cached intervals**: An interval computed for one level is kept until the
//!   next fit. Changing the level recomputes only the errors.
//! * **Not-fitted queries**: Residuals and intervals requested before a fit log
//!   a warning and return empty or zero values instead of failing.
//!
//! ## Key concepts
//!
//! * **Origin shift**: Subtracting the mean of x and/or y before fitting.
//! * **Mean-origin weighted fit**: A weighted fit without an intercept term,
//!   passing through the coordinate origin (the data mean after a full shift).
//!
//! ## Invariants
//!
//! * `x`, `y` and weights always have equal lengths of at least 3.
//! * `origin_offset_*` equal the total amount subtracted from each axis.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::{
    LineFit, fit_line, fit_line_through_origin, inverse_variance_weights,
};
use crate::engine::config::FitConfig;
use crate::engine::format::error_label;
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::evaluation::intervals::{
    ConfidenceInterval, ConfidenceLevel, StandardErrors, degrees_of_freedom, t_statistic,
};
use crate::math::moments::mean;
use crate::primitives::errors::LinFitError;
use crate::series::Series;

// ============================================================================
// Origin Shift
// ============================================================================

/// Which axes to re-center on their mean before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginShift {
    /// Subtract `mean(x)` from every x (mode 0).
    X,

    /// Subtract `mean(y)` from every y (mode 1).
    Y,

    /// Both of the above (mode 2).
    Both,
}

impl OriginShift {
    /// Map a numeric mode (0 = x, 1 = y, 2 = both).
    pub fn from_mode(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Both),
            _ => None,
        }
    }

    /// Numeric mode of this shift.
    pub fn mode(self) -> u8 {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Both => 2,
        }
    }

    fn shifts_x(self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    fn shifts_y(self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }
}

// ============================================================================
// Linear Model
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct FitState<T> {
    line: LineFit<T>,
    weighted: bool,
    interval: Option<ConfidenceInterval<T>>,
}

/// Least-squares line with confidence intervals on slope and intercept.
///
/// # Example
/// ```
/// use linfit::prelude::*;
///
/// let x = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let y = [3.1, 4.9, 7.2, 8.8, 11.1];
///
/// let mut model = LinearModel::new(&x, &y)?;
/// model.fit(false)?;
/// let ci = model.confidence_interval(CL95)?;
///
/// assert!((model.slope().unwrap() - 2.0).abs() < 0.1);
/// assert!(ci.slope > 0.0);
/// # Ok::<(), LinFitError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<T> {
    name: Option<String>,
    x_var: Option<String>,
    y_var: Option<String>,
    x: Vec<T>,
    y: Vec<T>,
    weights: Option<Vec<T>>,
    use_mean_origin: bool,
    origin_offset_x: T,
    origin_offset_y: T,
    state: Option<FitState<T>>,
}

impl<T: Float> LinearModel<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Unweighted model over paired samples.
    pub fn new(x: &[T], y: &[T]) -> Result<Self, LinFitError> {
        Validator::validate_inputs(x, y)?;
        Ok(Self::from_validated(x.to_vec(), y.to_vec(), None))
    }

    /// Model with one weight per sample, used by weighted fits.
    pub fn with_weights(x: &[T], y: &[T], weights: &[T]) -> Result<Self, LinFitError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_weights(weights, x.len())?;
        Ok(Self::from_validated(
            x.to_vec(),
            y.to_vec(),
            Some(weights.to_vec()),
        ))
    }

    /// Model over the points of a series.
    ///
    /// If every point carries a vertical error bar, the bar is read as `2σ`
    /// and inverse-variance weights `1/σ²` are attached.
    pub fn from_series(series: &Series<T>) -> Result<Self, LinFitError> {
        let x = series.x_values();
        let y = series.y_values();

        let all_have_errors = !series.is_empty() && series.iter().all(|p| p.has_vertical_error());
        let model = if all_have_errors {
            let two = T::one() + T::one();
            let sigmas: Vec<T> = series.iter().map(|p| p.error_y.mean() / two).collect();
            Self::with_weights(&x, &y, &inverse_variance_weights(&sigmas)?)?
        } else {
            Self::new(&x, &y)?
        };

        Ok(if series.name().is_empty() {
            model
        } else {
            model.with_name(series.name())
        })
    }

    fn from_validated(x: Vec<T>, y: Vec<T>, weights: Option<Vec<T>>) -> Self {
        Self {
            name: None,
            x_var: None,
            y_var: None,
            x,
            y,
            weights,
            use_mean_origin: false,
            origin_offset_x: T::zero(),
            origin_offset_y: T::zero(),
            state: None,
        }
    }

    /// Attach a name used in summaries.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the headers of the independent and dependent variables.
    pub fn with_headers(mut self, x_var: impl Into<String>, y_var: impl Into<String>) -> Self {
        self.x_var = Some(x_var.into());
        self.y_var = Some(y_var.into());
        self
    }

    /// Drop the intercept term from weighted fits.
    pub fn mean_origin(mut self, enabled: bool) -> Self {
        self.use_mean_origin = enabled;
        self
    }

    /// Drop (or restore) the intercept term for subsequent weighted fits.
    pub fn set_use_mean_origin(&mut self, enabled: bool) {
        self.use_mean_origin = enabled;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Model name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Header of the independent variable.
    pub fn x_var(&self) -> Option<&str> {
        self.x_var.as_deref()
    }

    /// Header of the dependent variable.
    pub fn y_var(&self) -> Option<&str> {
        self.y_var.as_deref()
    }

    /// x-values in fitted (possibly shifted) coordinates.
    pub fn x_values(&self) -> &[T] {
        &self.x
    }

    /// y-values in fitted (possibly shifted) coordinates.
    pub fn y_values(&self) -> &[T] {
        &self.y
    }

    /// Per-sample weights, if any.
    pub fn weights(&self) -> Option<&[T]> {
        self.weights.as_deref()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction requires at least three samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Whether weighted fits run without an intercept term.
    pub fn uses_mean_origin(&self) -> bool {
        self.use_mean_origin
    }

    /// Total amount subtracted from x.
    pub fn origin_offset_x(&self) -> T {
        self.origin_offset_x
    }

    /// Total amount subtracted from y.
    pub fn origin_offset_y(&self) -> T {
        self.origin_offset_y
    }

    /// Short uncertainty label derived from the y header.
    pub fn error_label(&self) -> String {
        error_label(self.y_var.as_deref())
    }

    // ========================================================================
    // Origin Shift
    // ========================================================================

    /// Re-center the stored data on its mean.
    ///
    /// Calling this again shifts by the (new) mean once more; offsets
    /// accumulate. Any previous fit is discarded.
    pub fn set_origin(&mut self, shift: OriginShift) {
        if shift.shifts_x() {
            let m = mean(&self.x);
            self.x = self.x.iter().map(|&v| v - m).collect();
            self.origin_offset_x = self.origin_offset_x + m;
        }
        if shift.shifts_y() {
            let m = mean(&self.y);
            self.y = self.y.iter().map(|&v| v - m).collect();
            self.origin_offset_y = self.origin_offset_y + m;
        }
        self.state = None;

        tracing::debug!(
            model = ?self.name,
            mode = shift.mode(),
            offset_x = self.origin_offset_x.to_f64(),
            offset_y = self.origin_offset_y.to_f64(),
            "shifted origin"
        );
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit the line, replacing any previous fit and cached interval.
    ///
    /// A weighted fit uses the model's weights and fails with
    /// [`LinFitError::MissingWeights`] if there are none. On error the previous
    /// fit (if any) is kept.
    pub fn fit(&mut self, weighted: bool) -> Result<(), LinFitError> {
        let weights = if weighted {
            Some(self.weights.as_deref().ok_or(LinFitError::MissingWeights)?)
        } else {
            None
        };

        let line = if weighted && self.use_mean_origin {
            fit_line_through_origin(&self.x, &self.y, weights)?
        } else {
            fit_line(&self.x, &self.y, weights)?
        };

        tracing::debug!(
            model = ?self.name,
            n = self.x.len(),
            weighted,
            intercept_fixed = line.intercept_fixed,
            slope = line.slope.to_f64(),
            intercept = line.intercept.to_f64(),
            "fitted line"
        );

        self.state = Some(FitState {
            line,
            weighted,
            interval: None,
        });
        Ok(())
    }

    /// Fit, compute intervals at the configured level and return a snapshot.
    ///
    /// Either both steps succeed or the model keeps its previous state.
    pub fn fit_with(&mut self, config: &FitConfig) -> Result<FitResult<T>, LinFitError> {
        config.validate()?;

        let previous = self.state.clone();
        let outcome = self
            .fit(config.weighted)
            .and_then(|()| self.compute_confidence_intervals(config.confidence_level));
        if let Err(err) = outcome {
            self.state = previous;
            return Err(err);
        }

        self.result()
            .ok_or_else(|| LinFitError::InvalidInput("fit produced no result".to_string()))
    }

    /// Whether a fit has been performed since construction or the last shift.
    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// Fitted slope.
    pub fn slope(&self) -> Option<T> {
        self.state.as_ref().map(|s| s.line.slope)
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> Option<T> {
        self.state.as_ref().map(|s| s.line.intercept)
    }

    /// Evaluate the fitted line at `x` (fitted coordinates).
    pub fn predict(&self, x: T) -> Option<T> {
        self.state.as_ref().map(|s| s.line.predict(x))
    }

    /// Residuals `yᵢ − (slope·xᵢ + intercept)`; empty before the first fit.
    pub fn residuals(&self) -> Vec<T> {
        match &self.state {
            Some(state) => state.line.residuals(&self.x, &self.y),
            None => {
                tracing::warn!(model = ?self.name, "residuals requested before fit");
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Uncertainty
    // ========================================================================

    /// Residual degrees of freedom (`n − 2`).
    pub fn degrees_of_freedom(&self) -> usize {
        degrees_of_freedom(self.x.len())
    }

    /// Two-sided Student-t multiplier for `level`.
    pub fn t_statistic(&self, level: ConfidenceLevel) -> Result<T, LinFitError> {
        t_statistic(level, self.degrees_of_freedom())
    }

    /// Standard errors of slope and intercept; zero before the first fit.
    ///
    /// A fixed intercept has zero error.
    pub fn standard_errors(&self) -> Result<StandardErrors<T>, LinFitError> {
        let Some(state) = &self.state else {
            tracing::warn!(model = ?self.name, "standard errors requested before fit");
            return Ok(StandardErrors::zero());
        };

        let residuals = state.line.residuals(&self.x, &self.y);
        let mut errors = StandardErrors::compute(&self.x, &residuals)?;
        if state.line.intercept_fixed {
            errors.intercept = T::zero();
        }
        Ok(errors)
    }

    /// Interval half-widths at `level`; zero before the first fit.
    ///
    /// Does not change the cached interval.
    pub fn confidence_interval(
        &self,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval<T>, LinFitError> {
        if self.state.is_none() {
            tracing::warn!(model = ?self.name, %level, "confidence interval requested before fit");
            return Ok(ConfidenceInterval::zero(level));
        }
        ConfidenceInterval::from_standard_errors(
            self.standard_errors()?,
            self.degrees_of_freedom(),
            level,
        )
    }

    /// One-standard-deviation half-widths.
    pub fn standard_deviations(&self) -> Result<ConfidenceInterval<T>, LinFitError> {
        self.confidence_interval(ConfidenceLevel::StandardDeviation)
    }

    /// Compute and cache the interval at `level`, replacing any cached one.
    ///
    /// Slope and intercept are not refitted. A no-op before the first fit.
    pub fn compute_confidence_intervals(
        &mut self,
        level: ConfidenceLevel,
    ) -> Result<(), LinFitError> {
        let interval = self.confidence_interval(level)?;
        if let Some(state) = self.state.as_mut() {
            state.interval = Some(interval);
        }
        Ok(())
    }

    /// Cached interval from the last `compute_confidence_intervals` call.
    pub fn cached_interval(&self) -> Option<ConfidenceInterval<T>> {
        self.state.as_ref().and_then(|s| s.interval)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Snapshot of the fit, or `None` before the first fit.
    ///
    /// Error half-widths come from the cached interval; without one they are
    /// zero at the default level.
    pub fn result(&self) -> Option<FitResult<T>> {
        let state = self.state.as_ref()?;
        let interval = state
            .interval
            .unwrap_or_else(|| ConfidenceInterval::zero(ConfidenceLevel::default()));

        Some(FitResult {
            slope: state.line.slope,
            intercept: state.line.intercept,
            slope_error: interval.slope,
            intercept_error: interval.intercept,
            origin_offset_x: self.origin_offset_x,
            origin_offset_y: self.origin_offset_y,
            residuals: state.line.residuals(&self.x, &self.y),
            confidence_level: interval.level,
            degrees_of_freedom: self.degrees_of_freedom(),
            weighted: state.weighted,
            intercept_fixed: state.line.intercept_fixed,
            name: self.name.clone(),
            x_var: self.x_var.clone(),
            y_var: self.y_var.clone(),
        })
    }
}
