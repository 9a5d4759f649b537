//! `zenflow` library: body metrics calculator with configuration, logging
//! and report rendering shared by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
