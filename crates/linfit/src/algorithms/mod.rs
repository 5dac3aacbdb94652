//! Layer 3: Algorithms
//!
//! This layer implements the core logic: proximity grouping of repeated
//! measurements and least-squares line fitting. It is orchestrated by the
//! series store and the linear model.

// Proximity grouping and aggregation.
pub mod grouping;

// Least-squares line solvers.
pub mod regression;
