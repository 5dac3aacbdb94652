#![cfg(feature = "dev")]
//! Tests for standard errors and confidence intervals.
//!
//! These tests verify the uncertainty of fitted coefficients:
//! - Standard errors of slope and intercept
//! - Mapping of confidence levels to t-multipliers
//! - Interval half-widths and their ordering
//!
//! ## Test Organization
//!
//! 1. **Confidence Levels** - Probabilities and flags
//! 2. **Standard Errors** - Closed-form values, validation
//! 3. **t-Statistic** - Table values and degrees of freedom
//! 4. **Intervals** - Scaling and ordering

use approx::assert_relative_eq;
use linfit::prelude::*;

use linfit::internals::evaluation::intervals::{degrees_of_freedom, t_statistic};

// ============================================================================
// Confidence Level Tests
// ============================================================================

/// Test the probability mapping of each level.
#[test]
fn test_confidence_mapping() {
    assert_eq!(CL99.confidence(), 0.99);
    assert_eq!(CL95.confidence(), 0.95);
    assert_eq!(StandardDeviation.confidence(), 0.683);
    assert_eq!(CL50.confidence(), 0.5);

    assert_relative_eq!(CL95.alpha(), 0.05, epsilon = 1e-15);
    assert_relative_eq!(CL95.quantile(), 0.975, epsilon = 1e-15);
    assert_eq!(ConfidenceLevel::default(), CL95);
}

/// Test the numeric flags.
#[test]
fn test_confidence_flags() {
    for level in ConfidenceLevel::ALL {
        assert_eq!(ConfidenceLevel::from_u8(level.to_u8()), level);
    }
    assert_eq!(ConfidenceLevel::from_u8(42), CL95);
    assert_eq!(StandardDeviation.to_string(), "1σ (68.3%)");
}

// ============================================================================
// Standard Error Tests
// ============================================================================

/// Test standard errors against hand-computed values.
#[test]
fn test_standard_errors_closed_form() {
    // x = 1..5, residuals with SSR = 3.2: SE_slope = sqrt(3.2 / 3 / 10)
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let residuals = [-0.4, 0.6, 0.6, -1.4, 0.6];

    let se = StandardErrors::compute(&x, &residuals).unwrap();
    let expected_slope = (3.2_f64 / 3.0 / 10.0).sqrt();

    assert_relative_eq!(se.slope, expected_slope, epsilon = 1e-12);
    assert_relative_eq!(se.intercept, expected_slope * 11.0_f64.sqrt(), epsilon = 1e-12);
}

/// Test that a perfect fit has zero standard errors.
#[test]
fn test_standard_errors_perfect_fit() {
    let se = StandardErrors::compute(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]).unwrap();
    assert_eq!(se, StandardErrors::zero());
}

/// Test rejection of too few samples and zero x-spread.
#[test]
fn test_standard_errors_validation() {
    assert!(matches!(
        StandardErrors::compute(&[1.0, 2.0], &[0.1, -0.1]),
        Err(LinFitError::TooFewPoints { got: 2, min: 3 })
    ));
    assert!(matches!(
        StandardErrors::compute(&[1.0, 1.0, 1.0], &[0.1, -0.1, 0.0]),
        Err(LinFitError::DegenerateInput(_))
    ));
}

// ============================================================================
// t-Statistic Tests
// ============================================================================

/// Test t-multipliers for each level.
#[test]
fn test_t_statistic_levels() {
    let t95: f64 = t_statistic(CL95, 10).unwrap();
    let t99: f64 = t_statistic(CL99, 5).unwrap();
    let t50: f64 = t_statistic(CL50, 10).unwrap();

    assert_relative_eq!(t95, 2.228_138_85, epsilon = 1e-6);
    assert_relative_eq!(t99, 4.032_142_98, epsilon = 1e-6);
    assert_relative_eq!(t50, 0.699_812_06, epsilon = 1e-6);
}

/// Test degrees of freedom and the zero-df rejection.
#[test]
fn test_degrees_of_freedom() {
    assert_eq!(degrees_of_freedom(12), 10);
    assert_eq!(degrees_of_freedom(1), 0);
    assert!(t_statistic::<f64>(CL95, 0).is_err());
}

// ============================================================================
// Interval Tests
// ============================================================================

/// Test that intervals scale standard errors by t.
#[test]
fn test_interval_scaling() {
    let se = StandardErrors {
        slope: 0.5,
        intercept: 2.0,
    };
    let ci = ConfidenceInterval::from_standard_errors(se, 10, CL95).unwrap();

    assert_relative_eq!(ci.slope, 0.5 * 2.228_138_85, epsilon = 1e-6);
    assert_relative_eq!(ci.intercept, 2.0 * 2.228_138_85, epsilon = 1e-6);
    assert_eq!(ci.level, CL95);
}

/// Test that wider coverage never gives narrower intervals.
#[test]
fn test_interval_ordering() {
    let se = StandardErrors {
        slope: 1.0,
        intercept: 1.0,
    };
    for df in [1, 2, 3, 8, 40] {
        let widths: Vec<f64> = ConfidenceLevel::ALL
            .iter()
            .map(|&level| {
                ConfidenceInterval::from_standard_errors(se, df, level)
                    .unwrap()
                    .slope
            })
            .collect();
        assert!(widths.windows(2).all(|w| w[0] >= w[1]), "df={df}: {widths:?}");
    }
}
