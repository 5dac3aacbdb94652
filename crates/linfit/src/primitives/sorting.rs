//! Sorting utilities for measurement points.
//!
//! ## Purpose
//!
//! This module sorts points by their x-coordinate ahead of proximity grouping.
//! Series keep insertion order; sorting is private to the aggregation path.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of equal x-values.
//! * **Robustness**: NaN x-values are moved to the end of the sequence.
//! * **Fast path**: Already sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing (for non-NaN values).
//! * The output is a permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not perform data validation or grouping.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::DataPoint;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Total order on x used for sorting: NaN sorts after every number.
#[inline]
fn compare_x<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Return the points sorted by x in ascending order.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Performs a stable sort on a copy, leaving the input untouched.
#[inline]
pub fn sort_points_by_x<T: Float>(points: &[DataPoint<T>]) -> Vec<DataPoint<T>> {
    let is_sorted = points
        .windows(2)
        .all(|w| compare_x(w[0].x, w[1].x) != Ordering::Greater);

    let mut sorted = points.to_vec();
    if !is_sorted {
        sorted.sort_by(|a, b| compare_x(a.x, b.x));
    }
    sorted
}
