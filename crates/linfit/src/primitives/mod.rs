//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types, error types and small utilities used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API (Series, LinearModel)
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Measurement points and error bars.
pub mod point;

/// Sorting utilities.
pub mod sorting;
