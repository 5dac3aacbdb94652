//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer quantifies the uncertainty of a fitted line: standard errors of
//! the coefficients and Student-t confidence intervals.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API (Series, LinearModel)
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Confidence levels, standard errors and interval half-widths.
pub mod intervals;
