//! Named series of measurement points.
//!
//! ## Purpose
//!
//! This module provides [`Series`], the store that owns one named, ordered
//! sequence of [`DataPoint`]s and offers translation, aggregation and range
//! queries for downstream consumers such as axis scaling.
//!
//! ## Design notes
//!
//! * **Insertion order**: Points iterate in the order they were added; sorting
//!   happens only inside aggregation.
//! * **Whole-sequence updates**: `translate` and `aggregate` build a new point
//!   vector and swap it in.
//! * **Loud ranges**: Min/max on an empty series is an error, not 0 or NaN.
//!
//! ## Non-goals
//!
//! * Parsing files or detecting delimiters. Columns arrive already parsed.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::grouping;
use crate::primitives::errors::LinFitError;
use crate::primitives::point::DataPoint;

// ============================================================================
// Series
// ============================================================================

/// A named, ordered sequence of measurement points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series<T> {
    name: String,
    points: Vec<DataPoint<T>>,
}

impl<T: Float> Series<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Empty series with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Series holding `points` in the given order.
    pub fn with_points(name: impl Into<String>, points: Vec<DataPoint<T>>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Series from paired samples.
    pub fn from_samples(name: impl Into<String>, x: &[T], y: &[T]) -> Result<Self, LinFitError> {
        if x.len() != y.len() {
            return Err(LinFitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let points = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| DataPoint::new(xi, yi))
            .collect();
        Ok(Self::with_points(name, points))
    }

    /// Split parsed columns into series.
    ///
    /// Column 0 is the independent variable; every further column becomes one
    /// series named `series N` (1-based).
    pub fn from_columns(columns: &[Vec<T>]) -> Result<Vec<Self>, LinFitError> {
        let names: Vec<String> = (1..columns.len()).map(|i| format!("series {i}")).collect();
        Self::split_columns(columns, &names)
    }

    /// Split parsed columns into series named after `headers[1..]`.
    ///
    /// `headers[0]` names the independent variable and is not used.
    pub fn from_columns_with_headers(
        columns: &[Vec<T>],
        headers: &[&str],
    ) -> Result<Vec<Self>, LinFitError> {
        if headers.len() != columns.len() {
            return Err(LinFitError::InvalidInput(format!(
                "{} headers supplied for {} columns",
                headers.len(),
                columns.len()
            )));
        }
        let names: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();
        Self::split_columns(columns, &names)
    }

    fn split_columns(columns: &[Vec<T>], names: &[String]) -> Result<Vec<Self>, LinFitError> {
        let Some((x, dependents)) = columns.split_first() else {
            return Err(LinFitError::EmptyInput);
        };
        if dependents.is_empty() {
            return Err(LinFitError::TooFewPoints {
                got: columns.len(),
                min: 2,
            });
        }

        dependents
            .iter()
            .zip(names.iter())
            .map(|(y, name)| Self::from_samples(name.as_str(), x, y))
            .collect()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the series.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[DataPoint<T>] {
        &self.points
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, DataPoint<T>> {
        self.points.iter()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// x-values in insertion order.
    pub fn x_values(&self) -> Vec<T> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// y-values in insertion order.
    pub fn y_values(&self) -> Vec<T> {
        self.points.iter().map(|p| p.y).collect()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a bare sample.
    pub fn add_point(&mut self, x: T, y: T) {
        self.points.push(DataPoint::new(x, y));
    }

    /// Append a point with its error bars.
    pub fn push(&mut self, point: DataPoint<T>) {
        self.points.push(point);
    }

    /// Shift every x by `delta_x` (e.g. a unit offset such as Celsius to Kelvin).
    pub fn translate(&mut self, delta_x: T) {
        self.points = self.points.iter().map(|p| p.translated(delta_x)).collect();
    }

    /// Replace the points by their proximity aggregates.
    ///
    /// Groups of two or more points become one point with `2σ` bars. A point
    /// alone in its group keeps its existing bars, so raw measurements stay
    /// bar-free and earlier aggregates keep theirs. On error the series is left
    /// unchanged.
    pub fn aggregate(&mut self, threshold: T) -> Result<(), LinFitError> {
        self.points = grouping::aggregate(&self.points, threshold)?;
        Ok(())
    }

    /// Aggregated copy of this series; `self` is left unchanged.
    ///
    /// Singleton groups keep their existing bars, as in [`Series::aggregate`].
    pub fn aggregated(&self, threshold: T) -> Result<Self, LinFitError> {
        Ok(Self {
            name: self.name.clone(),
            points: grouping::aggregate(&self.points, threshold)?,
        })
    }

    // ========================================================================
    // Range Queries
    // ========================================================================

    fn extreme(&self, key: fn(&DataPoint<T>) -> T, pick: Ordering) -> Result<T, LinFitError> {
        self.points
            .iter()
            .map(key)
            .reduce(|best, v| match v.partial_cmp(&best) {
                Some(o) if o == pick => v,
                _ => best,
            })
            .ok_or_else(|| LinFitError::EmptySeries {
                name: self.name.clone(),
            })
    }

    /// Smallest x-value.
    pub fn minimum_x(&self) -> Result<T, LinFitError> {
        self.extreme(|p| p.x, Ordering::Less)
    }

    /// Smallest y-value.
    pub fn minimum_y(&self) -> Result<T, LinFitError> {
        self.extreme(|p| p.y, Ordering::Less)
    }

    /// Largest x-value.
    pub fn maximum_x(&self) -> Result<T, LinFitError> {
        self.extreme(|p| p.x, Ordering::Greater)
    }

    /// Largest y-value.
    pub fn maximum_y(&self) -> Result<T, LinFitError> {
        self.extreme(|p| p.y, Ordering::Greater)
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a DataPoint<T>;
    type IntoIter = core::slice::Iter<'a, DataPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
