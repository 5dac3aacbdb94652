//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer holds the pieces shared by the public API: input validation,
//! fit configuration, numeric formatting and the result snapshot.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API (Series, LinearModel)
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit configuration.
pub mod config;

/// Numeric formatting contract.
pub mod format;

/// Result snapshot and renderings.
pub mod output;

/// Input validation.
pub mod validator;
