//! Tests for the linear model.
//!
//! These tests verify the public fitting workflow:
//! - Construction and input validation
//! - Unweighted, weighted and mean-origin fits
//! - Origin shifts and their bookkeeping
//! - Confidence intervals and the not-fitted behavior
//! - Result snapshots and models built from series
//!
//! ## Test Organization
//!
//! 1. **Construction** - Validation and builder options
//! 2. **Fitting** - OLS, WLS, fixed intercept
//! 3. **Origin Shift** - Re-centering
//! 4. **Intervals** - Values, ordering, caching
//! 5. **Not Fitted** - Empty and zero results
//! 6. **Results** - Snapshots, `fit_with`, `from_series`

use approx::assert_relative_eq;
use linfit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

const X: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
const Y: [f64; 5] = [2.0, 4.0, 5.0, 4.0, 7.0];

/// t(0.975, 3) from tables.
const T95_DF3: f64 = 3.182_446_31;

fn fitted() -> LinearModel<f64> {
    let mut model = LinearModel::new(&X, &Y).unwrap();
    model.fit(false).unwrap();
    model
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction failures.
#[test]
fn test_construction_validation() {
    assert_eq!(
        LinearModel::new(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err(),
        LinFitError::MismatchedInputs { x_len: 3, y_len: 2 }
    );
    assert_eq!(
        LinearModel::new(&[1.0, 2.0], &[1.0, 2.0]).unwrap_err(),
        LinFitError::TooFewPoints { got: 2, min: 3 }
    );
    assert!(matches!(
        LinearModel::new(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]),
        Err(LinFitError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        LinearModel::with_weights(&X, &Y, &[1.0, 1.0]),
        Err(LinFitError::MismatchedWeights { n: 5, weights_len: 2 })
    ));
    assert!(matches!(
        LinearModel::with_weights(&X, &Y, &[1.0, -1.0, 1.0, 1.0, 1.0]),
        Err(LinFitError::InvalidWeight { index: 1, .. })
    ));
    assert!(matches!(
        LinearModel::with_weights(&X, &Y, &[0.0; 5]),
        Err(LinFitError::InvalidWeight { .. })
    ));
}

/// Test builder options and accessors.
#[test]
fn test_builder_options() {
    let model = LinearModel::new(&X, &Y)
        .unwrap()
        .with_name("calibration")
        .with_headers("T", "H")
        .mean_origin(true);

    assert_eq!(model.name(), Some("calibration"));
    assert_eq!(model.x_var(), Some("T"));
    assert_eq!(model.y_var(), Some("H"));
    assert!(model.uses_mean_origin());
    assert_eq!(model.len(), 5);
    assert!(model.weights().is_none());
    assert!(!model.is_fitted());
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test the unweighted fit.
#[test]
fn test_fit_unweighted() {
    let model = fitted();

    assert!(model.is_fitted());
    assert_relative_eq!(model.slope().unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(model.intercept().unwrap(), 1.4, epsilon = 1e-12);
    assert_relative_eq!(model.predict(10.0).unwrap(), 11.4, epsilon = 1e-12);

    let residuals = model.residuals();
    let expected = [-0.4, 0.6, 0.6, -1.4, 0.6];
    assert_eq!(residuals.len(), 5);
    for (r, e) in residuals.iter().zip(expected) {
        assert_relative_eq!(*r, e, epsilon = 1e-12);
    }
}

/// Test that a weighted fit with unit weights equals the unweighted fit.
#[test]
fn test_fit_weighted_unit_weights() {
    let mut model = LinearModel::with_weights(&X, &Y, &[1.0; 5]).unwrap();
    model.fit(true).unwrap();
    let (slope, intercept) = (model.slope().unwrap(), model.intercept().unwrap());

    let plain = fitted();
    assert_relative_eq!(slope, plain.slope().unwrap(), epsilon = 1e-12);
    assert_relative_eq!(intercept, plain.intercept().unwrap(), epsilon = 1e-12);
}

/// Test that weights pull the line toward heavy samples.
#[test]
fn test_fit_weighted_leverage() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.0, 2.0, 6.0];

    let mut heavy_outlier = LinearModel::with_weights(&x, &y, &[1.0, 1.0, 1.0, 10.0]).unwrap();
    heavy_outlier.fit(true).unwrap();
    let mut light_outlier = LinearModel::with_weights(&x, &y, &[1.0, 1.0, 1.0, 0.1]).unwrap();
    light_outlier.fit(true).unwrap();

    assert!(heavy_outlier.slope().unwrap() > light_outlier.slope().unwrap());
}

/// Test that a weighted fit without weights fails and keeps no state.
#[test]
fn test_fit_weighted_without_weights() {
    let mut model = LinearModel::new(&X, &Y).unwrap();

    assert_eq!(model.fit(true).unwrap_err(), LinFitError::MissingWeights);
    assert!(!model.is_fitted());
}

/// Test that constant x fails instead of producing NaN.
#[test]
fn test_fit_zero_x_spread() {
    let mut model = LinearModel::new(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    let err = model.fit(false).unwrap_err();

    assert!(matches!(err, LinFitError::DegenerateInput(_)));
    assert!(err.is_invalid_input());
    assert!(!model.is_fitted());
}

/// Test the weighted fit through the mean origin.
#[test]
fn test_fit_mean_origin_fixed_intercept() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.1, 3.9, 6.2, 7.8, 10.0];
    let mut model = LinearModel::with_weights(&x, &y, &[1.0; 5])
        .unwrap()
        .mean_origin(true);
    model.set_origin(OriginShift::Both);
    model.fit(true).unwrap();

    assert_eq!(model.intercept(), Some(0.0));
    assert_relative_eq!(model.slope().unwrap(), 1.97, epsilon = 1e-12);

    let ci = model.confidence_interval(CL95).unwrap();
    assert_eq!(ci.intercept, 0.0);
    assert!(ci.slope > 0.0);

    model.compute_confidence_intervals(CL95).unwrap();
    let result = model.result().unwrap();
    assert!(result.intercept_fixed);
    assert!(result.weighted);
    assert_eq!(result.intercept_error, 0.0);
}

/// Test that constant non-zero x fails at fit time through the mean origin.
#[test]
fn test_fit_mean_origin_constant_x() {
    let mut model = LinearModel::with_weights(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], &[1.0; 3])
        .unwrap()
        .mean_origin(true);

    let err = model.fit(true).unwrap_err();
    assert!(matches!(err, LinFitError::DegenerateInput(_)));
    assert!(!model.is_fitted());

    let err = model.fit_with(&FitConfig::weighted()).unwrap_err();
    assert!(matches!(err, LinFitError::DegenerateInput(_)));
    assert!(!model.is_fitted());
    assert!(model.result().is_none());
}

/// Test that the mean-origin option does not affect unweighted fits.
#[test]
fn test_mean_origin_ignored_when_unweighted() {
    let mut model = LinearModel::new(&X, &Y).unwrap().mean_origin(true);
    model.fit(false).unwrap();

    assert_relative_eq!(model.intercept().unwrap(), 1.4, epsilon = 1e-12);
    assert!(!model.result().unwrap().intercept_fixed);
}

// ============================================================================
// Origin Shift Tests
// ============================================================================

/// Test the numeric modes.
#[test]
fn test_origin_shift_modes() {
    assert_eq!(OriginShift::from_mode(0), Some(OriginShift::X));
    assert_eq!(OriginShift::from_mode(1), Some(OriginShift::Y));
    assert_eq!(OriginShift::from_mode(2), Some(OriginShift::Both));
    assert_eq!(OriginShift::from_mode(3), None);
    assert_eq!(OriginShift::Both.mode(), 2);
}

/// Test that centering both axes puts the intercept at zero.
#[test]
fn test_set_origin_both_flat_line() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = [5.1, 4.9, 5.2, 4.8, 5.0, 5.0];

    let mut model = LinearModel::new(&x, &y).unwrap();
    model.set_origin(OriginShift::Both);
    model.fit(false).unwrap();

    let intercept = model.intercept().unwrap();
    assert_relative_eq!(intercept, 0.0, epsilon = 1e-12);
    assert_relative_eq!(model.origin_offset_x(), 3.5, epsilon = 1e-12);
    assert_relative_eq!(model.origin_offset_y() + intercept, 5.0, epsilon = 1e-12);
}

/// Test that shifting x only leaves the slope unchanged.
#[test]
fn test_set_origin_x_keeps_slope() {
    let mut model = LinearModel::new(&X, &Y).unwrap();
    model.set_origin(OriginShift::X);
    model.fit(false).unwrap();

    assert_relative_eq!(model.slope().unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(model.intercept().unwrap(), 4.4, epsilon = 1e-12);
    assert_eq!(model.origin_offset_y(), 0.0);
    assert_relative_eq!(model.x_values()[0], -2.0, epsilon = 1e-12);
}

/// Test that shifts invalidate the fit and offsets accumulate.
#[test]
fn test_set_origin_invalidates_and_compounds() {
    let mut model = fitted();
    model.set_origin(OriginShift::Y);
    assert!(!model.is_fitted());

    // The data is already centered, so the second shift adds ~0
    model.set_origin(OriginShift::Y);
    assert_relative_eq!(model.origin_offset_y(), 4.4, epsilon = 1e-12);
    assert_relative_eq!(model.y_values().iter().sum::<f64>(), 0.0, epsilon = 1e-12);
}

// ============================================================================
// Interval Tests
// ============================================================================

/// Test interval values against hand-computed ones.
#[test]
fn test_confidence_interval_values() {
    let model = fitted();
    let se_slope = (3.2_f64 / 3.0 / 10.0).sqrt();

    let se = model.standard_errors().unwrap();
    assert_relative_eq!(se.slope, se_slope, epsilon = 1e-12);
    assert_relative_eq!(se.intercept, se_slope * 11.0_f64.sqrt(), epsilon = 1e-12);

    assert_eq!(model.degrees_of_freedom(), 3);
    assert_relative_eq!(model.t_statistic(CL95).unwrap(), T95_DF3, epsilon = 1e-6);

    let ci = model.confidence_interval(CL95).unwrap();
    assert_relative_eq!(ci.slope, se_slope * T95_DF3, epsilon = 1e-6);
    assert_eq!(ci.level, CL95);
}

/// Test that wider coverage gives wider intervals.
#[test]
fn test_confidence_interval_ordering() {
    let model = fitted();
    let ci99 = model.confidence_interval(CL99).unwrap();
    let ci95 = model.confidence_interval(CL95).unwrap();
    let sd = model.standard_deviations().unwrap();
    let ci50 = model.confidence_interval(CL50).unwrap();

    assert!(ci99.slope >= ci95.slope);
    assert!(ci95.slope >= sd.slope);
    assert!(sd.slope >= ci50.slope);
    assert!(ci99.intercept >= ci95.intercept && ci95.intercept >= sd.intercept);
    assert_eq!(sd.level, StandardDeviation);
}

/// Test caching of computed intervals.
#[test]
fn test_compute_confidence_intervals_cache() {
    let mut model = fitted();
    assert!(model.cached_interval().is_none());
    assert_eq!(model.result().unwrap().slope_error, 0.0);

    model.compute_confidence_intervals(CL99).unwrap();
    let cached = model.cached_interval().unwrap();
    assert_eq!(cached, model.confidence_interval(CL99).unwrap());
    assert_eq!(model.result().unwrap().confidence_level, CL99);

    // Refitting drops the cache
    model.fit(false).unwrap();
    assert!(model.cached_interval().is_none());
}

// ============================================================================
// Not-Fitted Tests
// ============================================================================

/// Test the empty and zero results of an unfitted model.
#[test]
fn test_not_fitted_queries() {
    let mut model = LinearModel::new(&X, &Y).unwrap();

    assert!(model.residuals().is_empty());
    assert_eq!(model.standard_errors().unwrap(), StandardErrors::zero());
    assert_eq!(
        model.confidence_interval(CL95).unwrap(),
        ConfidenceInterval::zero(CL95)
    );
    assert!(model.compute_confidence_intervals(CL95).is_ok());
    assert!(model.slope().is_none());
    assert!(model.result().is_none());
}

// ============================================================================
// Result Tests
// ============================================================================

/// Test the one-shot fit.
#[test]
fn test_fit_with() {
    let mut model = LinearModel::new(&X, &Y)
        .unwrap()
        .with_name("A")
        .with_headers("x axis", "S");
    let result = model.fit_with(&FitConfig::strict()).unwrap();

    assert_eq!(result.confidence_level, CL99);
    assert_eq!(result.degrees_of_freedom, 3);
    assert_eq!(result.residuals.len(), 5);
    assert!(!result.weighted);
    assert!(result.slope_error > 0.0);
    assert_eq!(result.name.as_deref(), Some("A"));
    assert_eq!(result.error_label(), "ds");
    assert!(result.equation(&NumberFormat::new(1).unwrap()).starts_with("S = (1.0 ± "));
}

/// Test that a failed one-shot fit keeps the previous fit and cached interval.
#[test]
fn test_fit_with_failure_keeps_state() {
    let mut model = fitted();
    model.compute_confidence_intervals(CL50).unwrap();
    let before = model.result().unwrap();

    let err = model.fit_with(&FitConfig::weighted()).unwrap_err();
    assert_eq!(err, LinFitError::MissingWeights);

    assert!(model.is_fitted());
    assert_eq!(model.cached_interval().map(|ci| ci.level), Some(CL50));
    assert_eq!(model.result().unwrap(), before);
}

/// Test that a result is a snapshot unaffected by later changes.
#[test]
fn test_result_is_snapshot() {
    let mut model = fitted();
    let before = model.result().unwrap();

    model.set_origin(OriginShift::X);
    model.fit(false).unwrap();

    assert_relative_eq!(before.intercept, 1.4, epsilon = 1e-12);
    assert_eq!(before.origin_offset_x, 0.0);
    assert_relative_eq!(model.result().unwrap().origin_offset_x, 3.0, epsilon = 1e-12);
}

/// Test a model built from an aggregated series with error bars.
#[test]
fn test_from_series_weighted() {
    let mut series = Series::new("resistance");
    for (x, y) in [(1.0, 2.0), (2.0, 4.1), (3.0, 5.9), (4.0, 8.0)] {
        series.push(DataPoint::with_symmetric_errors(x, y, 0.0, 0.2));
    }

    let mut model = LinearModel::from_series(&series).unwrap();
    assert_eq!(model.name(), Some("resistance"));

    let weights = model.weights().unwrap();
    assert_eq!(weights.len(), 4);
    for w in weights {
        assert_relative_eq!(*w, 100.0, epsilon = 1e-9);
    }

    model.fit(true).unwrap();
    assert_relative_eq!(model.slope().unwrap(), 1.98, epsilon = 1e-9);
}

/// Test a model built from a series without error bars.
#[test]
fn test_from_series_unweighted() {
    let series = Series::from_samples("", &X, &Y).unwrap();
    let model = LinearModel::from_series(&series).unwrap();

    assert!(model.weights().is_none());
    assert!(model.name().is_none());

    let short = Series::from_samples("short", &[1.0, 2.0], &[1.0, 2.0]).unwrap();
    assert!(matches!(
        LinearModel::from_series(&short),
        Err(LinFitError::TooFewPoints { .. })
    ));
}
