//! CLI argument definitions for `PwePlanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

use pwe_planner::config::ConfigOverrides;
use pwe_planner::core::models::{Code, Semester, Year};
use pwe_planner::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Split a `CODE+CODE` batch into a set of validated codes
fn parse_code_batch(raw: &str) -> Result<BTreeSet<Code>, String> {
    let codes = raw
        .split('+')
        .filter(|part| !part.is_empty())
        .map(Code::new)
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|e| e.to_string())?;
    if codes.is_empty() {
        return Err(format!("no module codes in '{raw}'"));
    }
    Ok(codes)
}

/// One `--assign` batch: a target slot plus the codes to place there
/// (e.g. `2:2:CS2113T+CS2101`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignSpec {
    /// Target year
    pub year: Year,
    /// Target semester
    pub semester: Semester,
    /// Codes to place
    pub codes: BTreeSet<Code>,
}

impl FromStr for AssignSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(year), Some(semester), Some(codes)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!(
                "expected YEAR:SEMESTER:CODE[+CODE...], got '{s}'"
            ));
        };

        Ok(Self {
            year: year.parse::<Year>().map_err(|e| e.to_string())?,
            semester: semester.parse::<Semester>().map_err(|e| e.to_string())?,
            codes: parse_code_batch(codes)?,
        })
    }
}

/// One `--remove` batch: codes to remove from wherever they are planned
/// (e.g. `CS1010+CS2040C`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBatch(pub BTreeSet<Code>);

impl FromStr for CodeBatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code_batch(s).map(Self)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `years`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Inspect a module catalogue file.
    ///
    /// Loads a catalogue TOML file, checks that every co-requisite and
    /// requirement reference resolves, and lists the modules.
    Catalogue {
        /// Path to the catalogue TOML file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Build a degree plan from a catalogue and a batch of operations.
    ///
    /// Operations run in a fixed pipeline: every --assign batch in the order
    /// given, then every --remove batch, then --undo steps, then --redo
    /// steps. The resulting plan and requirement progress are printed last.
    Plan {
        /// Path to the catalogue TOML file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Place codes into a slot (repeatable): YEAR:SEMESTER:CODE[+CODE...]
        #[arg(long, value_name = "Y:S:CODES")]
        assign: Vec<AssignSpec>,

        /// Remove codes from wherever they are planned (repeatable): CODE[+CODE...]
        #[arg(long, value_name = "CODES")]
        remove: Vec<CodeBatch>,

        /// Undo this many mutations at the end of the pipeline
        #[arg(long, value_name = "N", default_value_t = 0)]
        undo: usize,

        /// Redo this many undone mutations after undoing
        #[arg(long, value_name = "N", default_value_t = 0)]
        redo: usize,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "pweplanner",
    about = "PwePlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalogue directory
    #[arg(long = "config-catalogue-dir", value_name = "DIR")]
    pub config_catalogue_dir: Option<PathBuf>,

    /// Override config catalogue directory (short form)
    #[arg(long = "catalogue-dir", value_name = "DIR")]
    pub catalogue_dir: Option<PathBuf>,

    /// Override the number of years in the plan grid (1-4)
    #[arg(long, value_name = "N")]
    pub years: Option<u8>,

    /// Override the number of semesters per year in the plan grid (1-4)
    #[arg(long, value_name = "N")]
    pub semesters: Option<u8>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalogue-dir`) take precedence over
    /// long-form flags (e.g., `--config-catalogue-dir`) when both are
    /// provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalogue_dir: self
                .catalogue_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_catalogue_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            years: self.years,
            semesters: self.semesters,
        }
    }
}
