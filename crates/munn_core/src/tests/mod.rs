//! Integration tests for the munn projection engine
//!
//! Tests are organized by topic:
//! - `schedules` - Recurrence rules and their anchoring
//! - `projection` - The day-stepped loop, ordering, and record emission
//! - `retirement` - Retirement date discovery during a projection
//! - `stats` - Annualized cash-flow statistics
//! - `builder_dsl` - Builder DSL for fluent portfolio setup
//! - `observer` - The debug channel

mod stats;

/// Tolerance for comparing balances produced by repeated multiplication
pub(crate) const EPSILON: f64 = 1e-6;

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected:.6}, got {actual:.6}"
    );
}
