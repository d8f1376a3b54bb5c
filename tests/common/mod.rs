//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use solar_savings::dashboard::Dashboard;
use solar_savings::model::selection::Selection;

/// Absolute tolerance for dollar and kWh comparisons.
pub const EPS: f64 = 1e-9;

/// Dashboard built from the built-in constants and catalog.
pub fn default_dashboard() -> Dashboard {
    Dashboard::default()
}

/// Selection from a list of ids.
pub fn select(ids: &[&str]) -> Selection {
    Selection::new(ids.iter().copied())
}

/// Every subset of the default catalog, in catalog order.
pub fn all_default_selections() -> Vec<Selection> {
    let ids = ["M1", "M2", "M3"];
    (0..(1u32 << ids.len()))
        .map(|mask| {
            Selection::new(
                ids.iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, id)| *id),
            )
        })
        .collect()
}

/// Asserts two floats agree within [`EPS`].
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}
