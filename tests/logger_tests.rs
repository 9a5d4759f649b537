//! Integration tests for logger behavior.

use std::fs;
use tempfile::TempDir;
use zenflow::logger::{
    close_file_logging, init_file_logging, set_level, set_level_from_str, Level,
};
use zenflow::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn file_logging_creates_parent_dirs_and_appends() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logs").join("zenflow.log");

    assert!(init_file_logging(&path));
    error!("written to file");
    close_file_logging();

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("[ERROR] written to file"));
}
