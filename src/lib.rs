//! Residential solar savings dashboard.

pub mod catalog;
/// Chart specifications and builders.
pub mod chart;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod io;
/// Savings and utility cost model.
pub mod model;

#[cfg(feature = "api")]
pub mod api;
#[cfg(feature = "tui")]
pub mod tui;
