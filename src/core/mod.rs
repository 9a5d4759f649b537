//! Core module: calculator, configuration and reports

pub mod calculator;
pub mod config;
pub mod metrics;
pub mod report;

/// Returns the current version of the `zenflow` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
