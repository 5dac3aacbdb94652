//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Sample moments and sums of squares
//! - Inverse normal CDF
//! - Student-t distribution functions
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Means, sums of squares and standard deviations.
pub mod moments;

/// Inverse standard normal CDF.
pub mod normal;

/// Student-t density, CDF and quantile.
pub mod student_t;
