//! High-level API for measurement series and linear fits.
//!
//! ## Purpose
//!
//! This module gathers the user-facing types of the crate in one place: the
//! [`Series`] store, the [`LinearModel`] fitter, and the configuration and
//! result types they exchange.
//!
//! ## Key concepts
//!
//! * **Workflow**: Build a `Series`, optionally `translate` and `aggregate` it,
//!   turn it into a `LinearModel` with `LinearModel::from_series`, then `fit`
//!   and query intervals (or call `fit_with` for a one-shot `FitResult`).
//! * **Errors**: Every fallible operation returns `Result<_, LinFitError>`.

// Publicly re-exported types
pub use crate::algorithms::grouping::{aggregate, collapse_group, group_by_proximity};
pub use crate::engine::config::FitConfig;
pub use crate::engine::format::{MAX_DECIMAL_DIGITS, NumberFormat};
pub use crate::engine::output::FitResult;
pub use crate::evaluation::intervals::{ConfidenceInterval, ConfidenceLevel, StandardErrors};
pub use crate::model::{LinearModel, OriginShift};
pub use crate::primitives::errors::LinFitError;
pub use crate::primitives::point::{DataPoint, ErrorBar};
pub use crate::series::Series;
