//! # linfit: Measurement Series and Linear Fits with Confidence Intervals
//!
//! Tools for the last step of a lab measurement: collapse repeated readings
//! into averaged points with error bars, then fit a straight line and report
//! slope and intercept together with Student-t confidence intervals.
//!
//! ## What does it do?
//!
//! * [`Series`](prelude::Series) stores a named sequence of points. Nearby
//!   x-values can be merged by *proximity aggregation*: points whose x lies
//!   within a threshold of the running group mean are averaged, and the
//!   group's spread becomes a `2σ` error bar.
//! * [`LinearModel`](prelude::LinearModel) fits `y = slope·x + intercept` by
//!   ordinary or weighted least squares, optionally after shifting the origin
//!   to the data mean, and computes interval half-widths at 99%, 95%, 1σ or
//!   50% confidence.
//!
//! ## Quick Start
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = vec![2.9, 5.1, 7.0, 9.1, 10.8, 13.2];
//!
//! let mut model = LinearModel::new(&x, &y)?;
//! model.fit(false)?;
//!
//! let ci = model.confidence_interval(CL95)?;
//! println!("slope = {:.3} ± {:.3}", model.slope().unwrap(), ci.slope);
//! # Result::<(), LinFitError>::Ok(())
//! ```
//!
//! ### Repeated measurements
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! // Three readings near each of two temperatures (°C).
//! let mut series = Series::from_samples(
//!     "resistance",
//!     &[20.0, 20.2, 19.9, 40.1, 39.8, 40.0],
//!     &[108.1, 108.4, 107.9, 115.8, 116.3, 116.0],
//! )?;
//!
//! series.translate(273.15); // to Kelvin
//! series.aggregate(1.0)?;
//!
//! assert_eq!(series.len(), 2);
//! assert!(series.points()[0].has_vertical_error());
//! # Result::<(), LinFitError>::Ok(())
//! ```
//!
//! ### One-shot fit
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = [1.0, 3.1, 4.9, 7.1, 8.9];
//!
//! let mut model = LinearModel::new(&x, &y)?.with_headers("time s", "height m");
//! let result = model.fit_with(&FitConfig::default().with_decimal_digits(3)?)?;
//!
//! println!("{}", result.equation(&NumberFormat::new(3)?));
//! assert_eq!(result.error_label(), "dh");
//! # Result::<(), LinFitError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, LinFitError>`. Querying a model that
//! has not been fitted is not an error: residuals come back empty, intervals
//! come back as zero, and a warning is emitted through `tracing`.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` for fits, shifts and aggregation;
//! `warn` for not-fitted queries) and installs no subscriber.
//!
//! ## Features
//!
//! * `serde`: `Serialize`/`Deserialize` for the public data types.
//! * `dev`: exposes the inner layers under `linfit::internals` for testing.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - grouping and least-squares solvers.
mod algorithms;

// Layer 4: Evaluation - standard errors and confidence intervals.
mod evaluation;

// Layer 5: Engine - validation, configuration and output.
mod engine;

// Layer 6: Series store and linear model.
mod model;
mod series;

// High-level API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        ConfidenceInterval, ConfidenceLevel,
        ConfidenceLevel::CL50,
        ConfidenceLevel::CL95,
        ConfidenceLevel::CL99,
        ConfidenceLevel::StandardDeviation,
        DataPoint, ErrorBar, FitConfig, FitResult, LinFitError, LinearModel, MAX_DECIMAL_DIGITS,
        NumberFormat, OriginShift, Series, StandardErrors, aggregate, collapse_group,
        group_by_proximity,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod model {
        pub use crate::model::*;
    }
    pub mod series {
        pub use crate::series::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
