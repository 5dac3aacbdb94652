//! Student-t distribution: density, CDF and quantile.
//!
//! ## Purpose
//!
//! This module supplies the t-multipliers that turn standard errors of the
//! regression coefficients into confidence-interval half-widths.
//!
//! ## Design notes
//!
//! * **CDF**: Expressed through the regularized incomplete beta function,
//!   evaluated with Lentz's continued fraction.
//! * **Quantile**: Closed forms for 1 and 2 degrees of freedom. Otherwise a
//!   Cornish-Fisher seed (from the normal quantile) refined by bracketed Newton
//!   iterations on the CDF.
//! * **Precision**: Works in `f64`; callers convert at the boundary.
//!
//! ## Invariants
//!
//! * `quantile(p, df)` is odd around `p = 0.5` and increasing in `p`.
//! * For fixed `p > 0.5` the quantile decreases toward the normal quantile as
//!   `df` grows.
//!
//! ## Non-goals
//!
//! * Non-central distributions.
//! * Tail probabilities beyond double precision (p within 1e-15 of 0 or 1).

// External dependencies
use core::f64::consts::PI;

// Internal dependencies
use crate::math::normal;

// ============================================================================
// Constants
// ============================================================================

/// Lanczos approximation parameter.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for `g = 7`, `n = 9`.
const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Iteration cap for the incomplete beta continued fraction.
const BETA_MAX_ITER: usize = 300;

/// Convergence tolerance for the continued fraction.
const BETA_EPS: f64 = 1e-15;

/// Floor that keeps Lentz's denominators away from zero.
const BETA_FPMIN: f64 = 1e-300;

/// Iteration cap for the quantile refinement.
const QUANTILE_MAX_ITER: usize = 100;

/// Relative tolerance for the quantile refinement.
const QUANTILE_TOL: f64 = 1e-13;

// ============================================================================
// Special Functions
// ============================================================================

/// Natural logarithm of the gamma function for `x > 0`.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection formula
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    let series = LANCZOS_COEF
        .iter()
        .enumerate()
        .skip(1)
        .fold(LANCZOS_COEF[0], |acc, (i, &c)| acc + c / (x + i as f64));

    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + series.ln()
}

/// Regularized incomplete beta function `I_x(a, b)`.
pub fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();

    // The continued fraction converges fastest below the mean of Beta(a, b)
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued fraction for the incomplete beta function (modified Lentz).
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let clamp = |v: f64| if v.abs() < BETA_FPMIN { BETA_FPMIN } else { v };

    let mut c = 1.0;
    let mut d = 1.0 / clamp(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=BETA_MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;

        // Even step
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 / clamp(1.0 + aa * d);
        c = clamp(1.0 + aa / c);
        h *= d * c;

        // Odd step
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 / clamp(1.0 + aa * d);
        c = clamp(1.0 + aa / c);
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < BETA_EPS {
            break;
        }
    }

    h
}

// ============================================================================
// Distribution Functions
// ============================================================================

/// Probability density of the t distribution with `df` degrees of freedom.
pub fn pdf(t: f64, df: f64) -> f64 {
    let ln_norm = ln_gamma((df + 1.0) / 2.0) - ln_gamma(df / 2.0) - 0.5 * (df * PI).ln();
    (ln_norm - (df + 1.0) / 2.0 * (t * t / df).ln_1p()).exp()
}

/// Cumulative distribution function `P(T <= t)`.
pub fn cdf(t: f64, df: f64) -> f64 {
    let x = df / (df + t * t);
    let tail = 0.5 * regularized_incomplete_beta(df / 2.0, 0.5, x);
    if t > 0.0 { 1.0 - tail } else { tail }
}

/// Quantile (inverse CDF) of the t distribution.
///
/// Returns `None` if `p` is outside (0, 1) or `df` is not positive and finite.
pub fn quantile(p: f64, df: f64) -> Option<f64> {
    if !(p > 0.0 && p < 1.0) || !(df > 0.0 && df.is_finite()) {
        return None;
    }

    if p == 0.5 {
        return Some(0.0);
    }
    if p < 0.5 {
        return quantile(1.0 - p, df).map(|t| -t);
    }

    // Closed forms
    if df == 1.0 {
        return Some((PI * (p - 0.5)).tan());
    }
    if df == 2.0 {
        return Some((2.0 * p - 1.0) / (2.0 * p * (1.0 - p)).sqrt());
    }

    Some(refine_quantile(p, df, cornish_fisher_seed(p, df)))
}

/// Cornish-Fisher expansion of the t quantile around the normal quantile.
fn cornish_fisher_seed(p: f64, df: f64) -> f64 {
    let z = normal::inverse_cdf(p);
    let z2 = z * z;
    let z3 = z2 * z;
    let z5 = z3 * z2;
    let z7 = z5 * z2;
    let z9 = z7 * z2;

    let g1 = (z3 + z) / 4.0;
    let g2 = (5.0 * z5 + 16.0 * z3 + 3.0 * z) / 96.0;
    let g3 = (3.0 * z7 + 19.0 * z5 + 17.0 * z3 - 15.0 * z) / 384.0;
    let g4 = (79.0 * z9 + 776.0 * z7 + 1482.0 * z5 - 1920.0 * z3 - 945.0 * z) / 92160.0;

    z + g1 / df + g2 / (df * df) + g3 / df.powi(3) + g4 / df.powi(4)
}

/// Bracketed Newton refinement of `cdf(t) = p` for `p > 0.5`.
fn refine_quantile(p: f64, df: f64, seed: f64) -> f64 {
    // Bracket the root; the quantile is positive for p > 0.5
    let mut lo = 0.0;
    let mut hi = seed.max(1.0) * 2.0;
    while cdf(hi, df) < p && hi < f64::MAX / 4.0 {
        lo = hi;
        hi *= 2.0;
    }

    let mut t = if seed > lo && seed < hi {
        seed
    } else {
        0.5 * (lo + hi)
    };

    for _ in 0..QUANTILE_MAX_ITER {
        let f = cdf(t, df) - p;
        if f < 0.0 {
            lo = t;
        } else {
            hi = t;
        }

        let mut next = t - f / pdf(t, df);
        if !next.is_finite() || next <= lo || next >= hi {
            next = 0.5 * (lo + hi);
        }

        if (next - t).abs() <= QUANTILE_TOL * t.abs().max(1.0) {
            return next;
        }
        t = next;
    }

    t
}
