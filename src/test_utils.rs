// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and synthetic media fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Default epsilon for f64 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F64_EPSILON: f64 = 1e-10;

/// Fixture builders shared with the integration tests and benchmarks.
#[path = "../tests/common/mod.rs"]
pub mod fixtures;
