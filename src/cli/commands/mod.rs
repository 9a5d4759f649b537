//! CLI command handlers for `zenflow`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod bmi;
pub mod config;
pub mod report;
