//! Configuration module for `PwePlanner`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

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

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for catalogue files given as bare names
    #[serde(default)]
    pub catalogue_dir: String,
}

const fn default_grid_dimension() -> u8 {
    4
}

/// Degree plan grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Number of years in the degree plan grid (1-4)
    #[serde(default = "default_grid_dimension")]
    pub years: u8,
    /// Number of semesters per year in the degree plan grid (1-4)
    #[serde(default = "default_grid_dimension")]
    pub semesters: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            years: default_grid_dimension(),
            semesters: default_grid_dimension(),
        }
    }
}

/// Runtime configuration overrides supplied by the CLI
///
/// Each field is optional; `None` means "no override".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalogue directory
    pub catalogue_dir: Option<String>,
    /// Override the number of years in the plan grid
    pub years: Option<u8>,
    /// Override the number of semesters per year in the plan grid
    pub semesters: Option<u8>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Degree plan grid settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Config {
    /// Get the `$PWE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/pweplanner`
    /// - macOS: `~/Library/Application Support/pweplanner`
    /// - Windows: `%APPDATA%\pweplanner`
    #[must_use]
    pub fn get_pweplanner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pweplanner")
    }

    /// Merge missing fields from defaults into this config
    /// Returns true if any fields were added
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        // Merge string fields only when they're empty (use defaults for empty values)
        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.paths.catalogue_dir.is_empty() && !defaults.paths.catalogue_dir.is_empty() {
            self.paths
                .catalogue_dir
                .clone_from(&defaults.paths.catalogue_dir);
            changed = true;
        }

        // Grid dimensions of 0 can only come from a hand-edited file; repair them
        if self.planner.years == 0 {
            self.planner.years = defaults.planner.years;
            changed = true;
        }
        if self.planner.semesters == 0 {
            self.planner.semesters = defaults.planner.semesters;
            changed = true;
        }

        changed
    }

    /// Apply CLI overrides to this config for the current run
    ///
    /// # Arguments
    /// * `overrides` - A `ConfigOverrides` struct with optional override values
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

        if let Some(catalogue_dir) = &overrides.catalogue_dir {
            self.paths.catalogue_dir.clone_from(catalogue_dir);
        }

        if let Some(years) = overrides.years {
            self.planner.years = years;
        }
        if let Some(semesters) = overrides.semesters {
            self.planner.semesters = semesters;
        }
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            Self::get_pweplanner_dir().join("dconfig.toml")
        }
        #[cfg(not(debug_assertions))]
        {
            Self::get_pweplanner_dir().join("config.toml")
        }
    }

    /// Expand `$PWE_PLANNER` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$PWE_PLANNER") {
            let planner_dir = Self::get_pweplanner_dir();
            value.replace("$PWE_PLANNER", planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalogue_dir = Self::expand_variables(&config.paths.catalogue_dir);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults

            // Create the directory if it doesn't exist
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Save the default config
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalogue_dir" => Some(self.paths.catalogue_dir.clone()),
            "years" => Some(self.planner.years.to_string()),
            "semesters" => Some(self.planner.semesters.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalogue_dir" => self.paths.catalogue_dir = value.to_string(),
            "years" => self.planner.years = parse_grid_dimension(key, value)?,
            "semesters" => self.planner.semesters = parse_grid_dimension(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalogue_dir" => self
                .paths
                .catalogue_dir
                .clone_from(&defaults.paths.catalogue_dir),
            "years" => self.planner.years = defaults.planner.years,
            "semesters" => self.planner.semesters = defaults.planner.semesters,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_grid_dimension(key: &str, value: &str) -> Result<u8, String> {
    value
        .parse::<u8>()
        .ok()
        .filter(|v| (1..=4).contains(v))
        .ok_or_else(|| format!("Invalid value for '{key}': '{value}' (expected 1-4)"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalogue_dir = \"{}\"", self.paths.catalogue_dir)?;

        writeln!(f, "\n[planner]")?;
        writeln!(f, "  years = {}", self.planner.years)?;
        writeln!(f, "  semesters = {}", self.planner.semesters)?;

        Ok(())
    }
}
