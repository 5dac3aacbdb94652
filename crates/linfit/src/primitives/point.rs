//! Measurement points and error bars.
//!
//! ## Purpose
//!
//! This module defines the value types that flow between the series store, the
//! point aggregator and output collaborators: a per-axis [`ErrorBar`] and a
//! two-dimensional [`DataPoint`] carrying one error bar per axis.
//!
//! ## Design notes
//!
//! * **Value semantics**: Both types are `Copy`. Series replace whole point
//!   sequences instead of mutating points that may be referenced elsewhere.
//! * **Normalized**: Constructors store absolute values, so error components
//!   are never negative.
//!
//! ## Invariants
//!
//! * `ErrorBar::negative() >= 0` and `ErrorBar::positive() >= 0`; the fields are
//!   private and only reachable through the normalizing constructors.
//! * A point built from a bare sample has zero error on both axes.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Error Bar
// ============================================================================

/// Asymmetric uncertainty along one axis.
///
/// Fields are private so that every bar goes through [`ErrorBar::new`] and
/// both extents stay non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorBar<T> {
    negative: T,
    positive: T,
}

impl<T: Float> Default for ErrorBar<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> ErrorBar<T> {
    /// Error bar with the given extents (absolute values are taken).
    pub fn new(negative: T, positive: T) -> Self {
        Self {
            negative: negative.abs(),
            positive: positive.abs(),
        }
    }

    /// Symmetric error bar of the given magnitude.
    pub fn symmetric(magnitude: T) -> Self {
        Self::new(magnitude, magnitude)
    }

    /// No uncertainty.
    pub fn zero() -> Self {
        Self {
            negative: T::zero(),
            positive: T::zero(),
        }
    }

    /// Extent below the value.
    #[inline]
    pub fn negative(&self) -> T {
        self.negative
    }

    /// Extent above the value.
    #[inline]
    pub fn positive(&self) -> T {
        self.positive
    }

    /// True if either extent is non-zero.
    pub fn is_present(&self) -> bool {
        self.negative > T::zero() || self.positive > T::zero()
    }

    /// True if both extents are equal.
    pub fn is_symmetric(&self) -> bool {
        self.negative == self.positive
    }

    /// Mean of the two extents.
    pub fn mean(&self) -> T {
        (self.negative + self.positive) / (T::one() + T::one())
    }
}

// ============================================================================
// Data Point
// ============================================================================

/// A measurement with per-axis error bars.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint<T> {
    /// Independent variable.
    pub x: T,

    /// Dependent variable.
    pub y: T,

    /// Uncertainty along x.
    pub error_x: ErrorBar<T>,

    /// Uncertainty along y.
    pub error_y: ErrorBar<T>,
}

impl<T: Float> DataPoint<T> {
    /// Point from a bare sample, without uncertainty.
    pub fn new(x: T, y: T) -> Self {
        Self {
            x,
            y,
            error_x: ErrorBar::zero(),
            error_y: ErrorBar::zero(),
        }
    }

    /// Point with symmetric error bars on both axes.
    pub fn with_symmetric_errors(x: T, y: T, error_x: T, error_y: T) -> Self {
        Self {
            x,
            y,
            error_x: ErrorBar::symmetric(error_x),
            error_y: ErrorBar::symmetric(error_y),
        }
    }

    /// Point with fully specified (possibly asymmetric) error bars.
    pub fn with_errors(x: T, y: T, error_x: ErrorBar<T>, error_y: ErrorBar<T>) -> Self {
        Self {
            x,
            y,
            error_x: ErrorBar::new(error_x.negative, error_x.positive),
            error_y: ErrorBar::new(error_y.negative, error_y.positive),
        }
    }

    /// True if any error component is non-zero.
    pub fn has_errors(&self) -> bool {
        self.has_horizontal_error() || self.has_vertical_error()
    }

    /// True if the y error bar is non-zero.
    pub fn has_vertical_error(&self) -> bool {
        self.error_y.is_present()
    }

    /// True if the x error bar is non-zero.
    pub fn has_horizontal_error(&self) -> bool {
        self.error_x.is_present()
    }

    /// Copy of this point shifted along x.
    pub fn translated(&self, delta_x: T) -> Self {
        Self {
            x: self.x + delta_x,
            ..*self
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

fn write_error_bar<T: Float + Display>(f: &mut Formatter<'_>, bar: &ErrorBar<T>) -> Result {
    if !bar.is_present() {
        return Ok(());
    }
    if bar.is_symmetric() {
        write!(f, " [{:.1}]", bar.negative)
    } else {
        write!(f, " [{:.1},{:.1}]", bar.negative, bar.positive)
    }
}

impl<T: Float + Display> Display for DataPoint<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:.1}", self.x)?;
        write_error_bar(f, &self.error_x)?;
        write!(f, ", {:.1}", self.y)?;
        write_error_bar(f, &self.error_y)
    }
}
