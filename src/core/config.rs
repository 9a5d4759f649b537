//! Configuration module for `zenflow`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the zenflow config directory
const DIR_VARIABLE: &str = "$ZENFLOW";

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "name",
    "height_cm",
    "weight_kg",
    "reports_dir",
];

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Stored body measurements used when no inputs are given on the command line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Display name used in reports
    #[serde(default)]
    pub name: String,
    /// Height in centimetres (raw input, may be empty)
    #[serde(default)]
    pub height_cm: String,
    /// Weight in kilograms (raw input, may be empty)
    #[serde(default)]
    pub weight_kg: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Profile settings
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override profile height
    pub height_cm: Option<String>,
    /// Override profile weight
    pub weight_kg: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

/// Copy `default` into `field` when `field` is empty and `default` is not.
fn fill_if_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$ZENFLOW` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/zenflow`
    /// - macOS: `~/Library/Application Support/zenflow`
    /// - Windows: `%APPDATA%\zenflow`
    #[must_use]
    pub fn get_zenflow_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zenflow")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so upgrading picks up new settings without clobbering user values.
    /// Measurements are left alone: an empty height or weight is meaningful.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = fill_if_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_if_empty(&mut self.logging.file, &defaults.logging.file);
        changed |= fill_if_empty(&mut self.profile.name, &defaults.profile.name);
        changed |= fill_if_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir);
        changed
    }

    /// Apply CLI-provided overrides onto this configuration in place
    ///
    /// Only non-`None` values replace config values. A config modified this
    /// way must not be saved if the overrides are meant for one run only; use
    /// [`with_overrides`](Self::with_overrides) for that.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(height) = &overrides.height_cm {
            self.profile.height_cm.clone_from(height);
        }
        if let Some(weight) = &overrides.weight_kg {
            self.profile.weight_kg.clone_from(weight);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Effective configuration for this run: a copy with `overrides` applied
    ///
    /// `self` is left untouched, so it can still be edited and saved without
    /// persisting the overrides.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let stored = Config::load();
    /// let overrides = ConfigOverrides {
    ///     height_cm: Some("180".to_string()),
    ///     ..Default::default()
    /// };
    /// let config = stored.with_overrides(&overrides);
    /// ```
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Log file path with `$ZENFLOW` expanded; `None` when file logging is off
    #[must_use]
    pub fn log_file_path(&self) -> Option<PathBuf> {
        (!self.logging.file.is_empty())
            .then(|| PathBuf::from(Self::expand_variables(&self.logging.file)))
    }

    /// Reports directory with `$ZENFLOW` expanded
    #[must_use]
    pub fn reports_dir_path(&self) -> PathBuf {
        PathBuf::from(Self::expand_variables(&self.paths.reports_dir))
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_zenflow_dir`](Self::get_zenflow_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_zenflow_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ZENFLOW` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_zenflow_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Values are kept as written, `$ZENFLOW` included, so saving the config
    /// back does not bake in the local directory. Use
    /// [`log_file_path`](Self::log_file_path) and
    /// [`reports_dir_path`](Self::reports_dir_path) for the expanded paths.
    /// Missing fields take their serde defaults (empty strings / false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this indicates a build defect.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// See [`load_from`](Self::load_from).
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `path`, creating it from defaults if missing
    ///
    /// - File exists: parse it, merge missing fields from defaults, and save
    ///   back if anything was added.
    /// - File missing (first run): write the defaults to `path`.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !path.exists() {
            let _ = defaults.save_to(path);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(path) else {
            return defaults;
        };
        match Self::from_toml(&content) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(path);
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `path`, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation or the write fails
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys are listed in [`CONFIG_KEYS`]; dashed spellings
    /// (`height-cm`, `reports-dir`) are accepted too.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "name" => Some(self.profile.name.clone()),
            "height_cm" | "height-cm" | "height" => Some(self.profile.height_cm.clone()),
            "weight_kg" | "weight-kg" | "weight" => Some(self.profile.weight_kg.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save`](Self::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, `verbose` is not a boolean, or
    /// a measurement is neither empty nor a positive number.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "name" => self.profile.name = value.to_string(),
            "height_cm" | "height-cm" | "height" => {
                self.profile.height_cm = Self::validate_measure("height_cm", value)?;
            }
            "weight_kg" | "weight-kg" | "weight" => {
                self.profile.weight_kg = Self::validate_measure("weight_kg", value)?;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    fn validate_measure(key: &str, value: &str) -> Result<String, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() || crate::core::metrics::parse_positive(trimmed).is_some() {
            Ok(trimmed.to_string())
        } else {
            Err(format!(
                "Invalid value for '{key}': '{value}' (expected a positive number)"
            ))
        }
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "name" => self.profile.name.clone_from(&defaults.profile.name),
            "height_cm" | "height-cm" | "height" => self
                .profile
                .height_cm
                .clone_from(&defaults.profile.height_cm),
            "weight_kg" | "weight-kg" | "weight" => self
                .profile
                .weight_kg
                .clone_from(&defaults.profile.weight_kg),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the user config file; the next [`load`](Self::load) recreates
    /// it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[profile]")?;
        writeln!(f, "  name = \"{}\"", self.profile.name)?;
        writeln!(f, "  height_cm = \"{}\"", self.profile.height_cm)?;
        writeln!(f, "  weight_kg = \"{}\"", self.profile.weight_kg)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_numeric_measurements() {
        let mut config = Config::default();
        assert!(config.set("height_cm", "tall").is_err());
        assert!(config.set("weight", "-3").is_err());
        assert!(config.set("height", " 182 ").is_ok());
        assert_eq!(config.profile.height_cm, "182");
        assert!(config.set("weight_kg", "").is_ok());
    }

    #[test]
    fn merge_leaves_measurements_empty() {
        let mut config = Config::default();
        let mut defaults = Config::default();
        defaults.profile.height_cm = "170".to_string();
        defaults.paths.reports_dir = "./reports".to_string();

        assert!(config.merge_defaults(&defaults));
        assert!(config.profile.height_cm.is_empty());
        assert_eq!(config.paths.reports_dir, "./reports");
        assert!(!config.merge_defaults(&defaults));
    }

    #[test]
    fn overrides_leave_stored_config_alone() {
        let mut stored = Config::default();
        stored.profile.height_cm = "170".to_string();
        let overrides = ConfigOverrides {
            height_cm: Some("999".to_string()),
            verbose: Some(true),
            ..Default::default()
        };

        let effective = stored.with_overrides(&overrides);
        assert_eq!(effective.profile.height_cm, "999");
        assert!(effective.logging.verbose);
        assert_eq!(stored.profile.height_cm, "170");
        assert!(!stored.logging.verbose);
    }

    #[test]
    fn empty_log_file_disables_file_logging() {
        assert!(Config::default().log_file_path().is_none());
    }

    #[test]
    fn every_listed_key_is_readable() {
        let config = Config::from_defaults();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing key {key}");
        }
    }
}
