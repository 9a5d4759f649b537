//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use zenflow::config::{Config, ConfigOverrides};

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.profile.name, "Alex");
    // No measurements are assumed
    assert!(config.profile.height_cm.is_empty());
    assert!(config.profile.weight_kg.is_empty());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[profile]
name = "Sam"
height_cm = "172"
weight_kg = "64.5"

[paths]
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.profile.name, "Sam");
    assert_eq!(config.profile.height_cm, "172");
    assert_eq!(config.profile.weight_kg, "64.5");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.profile.height_cm, "");
    assert_eq!(config.paths.reports_dir, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$ZENFLOW/test.log"

[paths]
reports_dir = "$ZENFLOW/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Stored values keep the variable; the path accessors expand it
    assert_eq!(config.logging.file, "$ZENFLOW/test.log");
    assert_eq!(config.paths.reports_dir, "$ZENFLOW/reports");

    let log_path = config.log_file_path().expect("log file configured");
    assert_eq!(log_path, Config::get_zenflow_dir().join("test.log"));
    assert_eq!(
        config.reports_dir_path(),
        Config::get_zenflow_dir().join("reports")
    );
}

#[test]
fn test_save_keeps_dir_variable() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().expect("parent")).expect("create dir");
    fs::write(
        &config_file,
        "[logging]\nlevel = \"warn\"\nfile = \"$ZENFLOW/logs/z.log\"\n\n[paths]\nreports_dir = \"$ZENFLOW/reports\"\n",
    )
    .expect("write config");

    let mut config = Config::load_from(&config_file);
    config.set("name", "Bob").expect("Failed to set name");
    config.save_to(&config_file).expect("Failed to save config");

    let saved = fs::read_to_string(&config_file).expect("read config");
    assert!(saved.contains("$ZENFLOW/logs/z.log"));
    assert!(saved.contains("$ZENFLOW/reports"));
    let dir = Config::get_zenflow_dir();
    assert!(!saved.contains(dir.to_string_lossy().as_ref()));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    config.set("height-cm", "180").expect("Failed to set height");
    config.set("weight_kg", "70").expect("Failed to set weight");
    assert_eq!(config.get("height_cm").as_deref(), Some("180"));
    assert_eq!(config.get("weight").as_deref(), Some("70"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("height_cm", "190").expect("Failed to set height");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("height_cm", &defaults)
        .expect("Failed to unset height");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.profile.height_cm, defaults.profile.height_cm);
    assert!(config.unset("bogus", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("height_cm", "168").expect("Failed to set height");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.profile.height_cm, "168");
}

#[test]
fn test_load_from_creates_missing_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_from_merges_and_persists_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().expect("parent")).expect("create dir");
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").expect("write config");

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert!(!config.paths.reports_dir.is_empty());

    let saved = fs::read_to_string(&config_file).expect("read config");
    assert!(saved.contains("reports_dir"));
}

#[test]
fn test_load_from_falls_back_on_invalid_toml() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().expect("parent")).expect("create dir");
    fs::write(&config_file, "this is = = not toml").expect("write config");

    let config = Config::load_from(&config_file);
    assert_eq!(config.profile.name, Config::from_defaults().profile.name);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        height_cm: Some("181".to_string()),
        weight_kg: Some("77".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.profile.height_cm, "181");
    assert_eq!(config.profile.weight_kg, "77");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_overrides_not_persisted_by_config_edits() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut stored = Config::load_from(&config_file);
    let overrides = ConfigOverrides {
        height_cm: Some("999".to_string()),
        reports_dir: Some("/tmp/elsewhere".to_string()),
        ..Default::default()
    };
    let effective = stored.with_overrides(&overrides);
    assert_eq!(effective.profile.height_cm, "999");

    // `zenflow --config-height 999 config set name Bob` edits the stored copy
    stored.set("name", "Bob").expect("Failed to set name");
    stored.save_to(&config_file).expect("Failed to save config");

    let reloaded = Config::load_from(&config_file);
    assert_eq!(reloaded.profile.name, "Bob");
    assert!(reloaded.profile.height_cm.is_empty());
    assert_ne!(reloaded.paths.reports_dir, "/tmp/elsewhere");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, before);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[profile]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("height_cm"));
    assert!(display_str.contains("reports_dir"));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[profile]
name = ""
height_cm = "175"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.profile.height_cm, "175");
    assert_eq!(config.profile.name, defaults.profile.name);
}

#[test]
fn test_get_zenflow_dir() {
    let dir = Config::get_zenflow_dir();

    assert!(dir.to_string_lossy().contains("zenflow"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
