//! Sample moments and sums of squares.
//!
//! These are the building blocks shared by aggregation (means, sample standard
//! deviation) and interval estimation (residual and deviation sums of squares).
//! Empty input yields zero rather than NaN; callers validate lengths first.

// External dependencies
use num_traits::Float;

/// Convert a count into the float type.
#[inline]
pub fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

/// Fold `value` into a mean over `k - 1` earlier values: `m + (v − m) / k`.
///
/// Stays finite for inputs near the float range limits, where a plain sum
/// would overflow.
#[inline]
pub fn update_mean<T: Float>(mean: T, value: T, k: usize) -> T {
    mean + (value - mean) / count(k)
}

/// Arithmetic mean, or zero for empty input.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    values
        .iter()
        .enumerate()
        .fold(T::zero(), |m, (i, &v)| update_mean(m, v, i + 1))
}

/// Sum of squared values: `Σ vᵢ²`.
#[inline]
pub fn sum_of_squares<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v * v)
}

/// Sum of squared deviations from the mean: `Σ (vᵢ − v̄)²`.
#[inline]
pub fn sum_squared_deviation<T: Float>(values: &[T]) -> T {
    let m = mean(values);
    values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    })
}

/// Sample standard deviation with `n − 1` denominator.
///
/// A single sample (or none) has no spread and yields zero.
#[inline]
pub fn sample_std_dev<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n < 2 {
        return T::zero();
    }
    (sum_squared_deviation(values) / count(n - 1)).sqrt()
}
