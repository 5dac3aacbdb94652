//! Least-squares line fitting.
//!
//! ## Purpose
//!
//! This module provides the closed-form solvers behind `LinearModel::fit`:
//! - Ordinary least squares (all weights equal).
//! - Weighted least squares minimizing `Σ wᵢ (yᵢ − a − b·xᵢ)²`.
//! - Weighted least squares through the coordinate origin (no intercept term).
//!
//! ## Design notes
//!
//! * **Two-pass**: Weighted means first, then centered sums, avoiding the
//!   cancellation of the raw-moment formulas.
//! * **Degeneracy**: Zero spread in x is an error, never a NaN slope.
//!
//! ## Invariants
//!
//! * Inputs are validated (equal lengths, finite values, non-negative weights
//!   with a positive sum) before reaching these functions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LinFitError;

// ============================================================================
// Fitted Line
// ============================================================================

/// Coefficients of a fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit<T> {
    /// Slope of the line.
    pub slope: T,

    /// Intercept of the line (zero when fixed).
    pub intercept: T,

    /// Whether the intercept was held at zero instead of estimated.
    pub intercept_fixed: bool,
}

impl<T: Float> LineFit<T> {
    /// Evaluate the line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Residuals `yᵢ − (slope·xᵢ + intercept)`.
    pub fn residuals(&self, x: &[T], y: &[T]) -> Vec<T> {
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect()
    }
}

// ============================================================================
// Accumulation
// ============================================================================

/// Weighted sums needed by the line solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WlsSums<T> {
    /// `Σ w`
    pub sum_w: T,
    /// Weighted mean of x.
    pub x_mean: T,
    /// Weighted mean of y.
    pub y_mean: T,
    /// `Σ w (x − x̄)²`
    pub sxx: T,
    /// `Σ w (x − x̄)(y − ȳ)`
    pub sxy: T,
}

#[inline]
fn weight_at<T: Float>(weights: Option<&[T]>, i: usize) -> T {
    weights.map_or(T::one(), |w| w[i])
}

/// Accumulate centered weighted sums. `None` weights means unit weights.
pub fn accumulate_wls<T: Float>(x: &[T], y: &[T], weights: Option<&[T]>) -> WlsSums<T> {
    let n = x.len();

    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    for i in 0..n {
        let w = weight_at(weights, i);
        sum_w = sum_w + w;
        sum_wx = sum_wx + w * x[i];
        sum_wy = sum_wy + w * y[i];
    }

    if sum_w <= T::zero() {
        return WlsSums {
            sum_w,
            x_mean: T::zero(),
            y_mean: T::zero(),
            sxx: T::zero(),
            sxy: T::zero(),
        };
    }

    let x_mean = sum_wx / sum_w;
    let y_mean = sum_wy / sum_w;

    let mut sxx = T::zero();
    let mut sxy = T::zero();
    for i in 0..n {
        let w = weight_at(weights, i);
        let dx = x[i] - x_mean;
        sxx = sxx + w * dx * dx;
        sxy = sxy + w * dx * (y[i] - y_mean);
    }

    WlsSums {
        sum_w,
        x_mean,
        y_mean,
        sxx,
        sxy,
    }
}

/// True if every sample with positive weight shares the same x.
fn x_is_constant<T: Float>(x: &[T], weights: Option<&[T]>) -> bool {
    let mut active = x
        .iter()
        .enumerate()
        .filter(|&(i, _)| weight_at(weights, i) > T::zero())
        .map(|(_, &xi)| xi);

    match active.next() {
        Some(first) => active.all(|xi| xi == first),
        None => true,
    }
}

// ============================================================================
// Solvers
// ============================================================================

/// Weighted least squares with a free intercept (`None` weights gives OLS).
pub fn fit_line<T: Float>(
    x: &[T],
    y: &[T],
    weights: Option<&[T]>,
) -> Result<LineFit<T>, LinFitError> {
    if x_is_constant(x, weights) {
        return Err(LinFitError::DegenerateInput(
            "x values have zero spread; slope is undefined",
        ));
    }

    let sums = accumulate_wls(x, y, weights);
    if !(sums.sxx > T::zero()) {
        return Err(LinFitError::DegenerateInput(
            "x values have zero spread; slope is undefined",
        ));
    }

    let slope = sums.sxy / sums.sxx;
    let intercept = sums.y_mean - slope * sums.x_mean;

    Ok(LineFit {
        slope,
        intercept,
        intercept_fixed: false,
    })
}

/// Weighted least squares through the coordinate origin: `slope = Σwxy / Σwx²`.
///
/// Constant x is rejected up front, like [`fit_line`], since the interval
/// step needs a non-zero spread around the mean anyway.
pub fn fit_line_through_origin<T: Float>(
    x: &[T],
    y: &[T],
    weights: Option<&[T]>,
) -> Result<LineFit<T>, LinFitError> {
    if x_is_constant(x, weights) {
        return Err(LinFitError::DegenerateInput(
            "x values have zero spread; slope is undefined",
        ));
    }

    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();
    for i in 0..x.len() {
        let wx = weight_at(weights, i) * x[i];
        sum_wxx = sum_wxx + wx * x[i];
        sum_wxy = sum_wxy + wx * y[i];
    }

    if !(sum_wxx > T::zero()) {
        return Err(LinFitError::DegenerateInput(
            "all weighted x values are zero; slope through the origin is undefined",
        ));
    }

    Ok(LineFit {
        slope: sum_wxy / sum_wxx,
        intercept: T::zero(),
        intercept_fixed: true,
    })
}

// ============================================================================
// Weights
// ============================================================================

/// Inverse-variance weights `1/σᵢ²` from per-sample standard deviations.
pub fn inverse_variance_weights<T: Float>(sigmas: &[T]) -> Result<Vec<T>, LinFitError> {
    sigmas
        .iter()
        .enumerate()
        .map(|(index, &s)| {
            if s.is_finite() && s > T::zero() {
                Ok(T::one() / (s * s))
            } else {
                Err(LinFitError::InvalidWeight {
                    index,
                    value: s.to_f64().unwrap_or(f64::NAN),
                })
            }
        })
        .collect()
}
