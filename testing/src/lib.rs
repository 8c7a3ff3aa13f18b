//! # Petal Testing
//!
//! Testing utilities for Petal reducers: a fluent Given-When-Then harness
//! and common effect assertions.

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

use petal_core::environment::FixedClock;

/// A deterministic clock for tests, pinned to a stable instant
#[must_use]
pub fn test_clock() -> FixedClock {
    FixedClock::epoch_2024()
}
