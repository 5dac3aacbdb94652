//! Proximity grouping and aggregation of repeated measurements.
//!
//! ## Purpose
//!
//! This module collapses near-duplicate x measurements (e.g., repeated runs at
//! nominally the same condition) into single representative points whose error
//! bars reflect the spread of the repeats.
//!
//! ## Design notes
//!
//! * **Running mean**: A point joins the open group unless it lies more than
//!   `threshold` above the group's mean x. Comparing against the mean, not the
//!   first or last member, keeps the cutoff stable across clusters.
//! * **Single pass**: The mean is updated incrementally over the sorted input,
//!   so x-values near the float range limits do not overflow.
//! * **Materialized**: Groups are returned as a `Vec`; inputs are small.
//!
//! ## Key concepts
//!
//! * **Threshold**: An absolute x-distance, not a fraction.
//! * **Error bars**: Two sample standard deviations of the group's x and y.
//!
//! ## Invariants
//!
//! * Groups are contiguous in sorted x-order and cover every input point once.
//! * No group is empty; empty input yields no groups.
//! * A group with one member passes through unchanged, so re-aggregating an
//!   aggregated sequence with the same threshold is a no-op once every gap
//!   exceeds the threshold.
//!
//! ## Non-goals
//!
//! * This module does not keep the pre-aggregation points.
//! * This module does not weight members by their existing error bars.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{mean, sample_std_dev, update_mean};
use crate::primitives::errors::LinFitError;
use crate::primitives::point::DataPoint;
use crate::primitives::sorting::sort_points_by_x;

// ============================================================================
// Grouping
// ============================================================================

/// Partition points into clusters of nearby x-values.
///
/// 1. Sorts the points by x (stable).
/// 2. Closes the open group whenever the next x exceeds the group mean by more
///    than `threshold`.
/// 3. Emits the final group if it is non-empty.
pub fn group_by_proximity<T: Float>(
    points: &[DataPoint<T>],
    threshold: T,
) -> Result<Vec<Vec<DataPoint<T>>>, LinFitError> {
    if !threshold.is_finite() || threshold <= T::zero() {
        return Err(LinFitError::InvalidThreshold(
            threshold.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let mut groups = Vec::new();
    let mut open: Vec<DataPoint<T>> = Vec::new();
    let mut mean_x = T::zero();

    for point in sort_points_by_x(points) {
        if !open.is_empty() && point.x > mean_x + threshold {
            groups.push(core::mem::take(&mut open));
            mean_x = T::zero();
        }
        open.push(point);
        mean_x = update_mean(mean_x, point.x, open.len());
    }

    if !open.is_empty() {
        groups.push(open);
    }

    Ok(groups)
}

// ============================================================================
// Aggregation
// ============================================================================

/// Collapse one group into a single point with `2σ` error bars.
///
/// A singleton is returned as-is: one sample carries no spread of its own.
pub fn collapse_group<T: Float>(group: &[DataPoint<T>]) -> Option<DataPoint<T>> {
    match group {
        [] => None,
        [single] => Some(*single),
        _ => {
            let xs: Vec<T> = group.iter().map(|p| p.x).collect();
            let ys: Vec<T> = group.iter().map(|p| p.y).collect();
            let two = T::one() + T::one();

            Some(DataPoint::with_symmetric_errors(
                mean(&xs),
                mean(&ys),
                two * sample_std_dev(&xs),
                two * sample_std_dev(&ys),
            ))
        }
    }
}

/// Group points by proximity and collapse each group to one point.
///
/// Only groups of two or more points get fresh `2σ` bars. A point that ends
/// up alone in its group passes through with whatever bars it already has:
/// zero for a raw measurement, the earlier bars for an aggregated one.
pub fn aggregate<T: Float>(
    points: &[DataPoint<T>],
    threshold: T,
) -> Result<Vec<DataPoint<T>>, LinFitError> {
    let groups = group_by_proximity(points, threshold)?;

    let aggregated: Vec<DataPoint<T>> = groups.iter().filter_map(|g| collapse_group(g)).collect();

    tracing::debug!(
        points_in = points.len(),
        groups_out = aggregated.len(),
        "aggregated points by proximity"
    );
    for (i, g) in groups.iter().enumerate() {
        tracing::trace!(group = i, members = g.len(), "proximity group");
    }

    Ok(aggregated)
}
