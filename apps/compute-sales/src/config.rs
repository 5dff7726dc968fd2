//! # Report Configuration
//!
//! Where the report goes and what it contains.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --output, --no-timing, --quiet                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     COMPUTE_SALES_OUTPUT=report.txt                                    │
//! │     COMPUTE_SALES_SHOW_TIMING=false                                    │
//! │     COMPUTE_SALES_QUIET=true                                           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, else                                              │
//! │     ~/.config/compute-sales/config.toml (Linux)                        │
//! │     ~/Library/Application Support/compute-sales/config.toml (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     SalesResults.txt, timing shown, report printed                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [report]
//! output = "SalesResults.txt"
//! show_execution_time = true
//! quiet = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::error::{AppError, AppResult};

/// Report file written when nothing else is configured.
pub const DEFAULT_REPORT_FILE: &str = "SalesResults.txt";

pub const ENV_OUTPUT: &str = "COMPUTE_SALES_OUTPUT";
pub const ENV_SHOW_TIMING: &str = "COMPUTE_SALES_SHOW_TIMING";
pub const ENV_QUIET: &str = "COMPUTE_SALES_QUIET";

// =============================================================================
// Report Settings
// =============================================================================

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Report file path.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Include the "Execution Time" line.
    #[serde(default = "default_true")]
    pub show_execution_time: bool,

    /// Skip printing the report to stdout (the file is still written).
    #[serde(default)]
    pub quiet: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            output: default_output(),
            show_execution_time: true,
            quiet: false,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub report: ReportSettings,
}

impl ReportConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicitly given config file must exist. The platform default file
    /// is optional.
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "config file {} not found",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading report config from file");
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("could not read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies command-line flags on top of the loaded configuration.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref output) = cli.output {
            self.report.output = output.clone();
        }
        if cli.no_timing {
            self.report.show_execution_time = false;
        }
        if cli.quiet {
            self.report.quiet = true;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.report.output.as_os_str().is_empty() {
            return Err(AppError::Config("report output path must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output) = lookup(ENV_OUTPUT) {
            debug!(output = %output, "Overriding report output from environment");
            self.report.output = PathBuf::from(output);
        }

        if let Some(value) = lookup(ENV_SHOW_TIMING) {
            match parse_bool(&value) {
                Some(show) => self.report.show_execution_time = show,
                None => warn!(value = %value, "Ignoring invalid {}", ENV_SHOW_TIMING),
            }
        }

        if let Some(value) = lookup(ENV_QUIET) {
            match parse_bool(&value) {
                Some(quiet) => self.report.quiet = quiet,
                None => warn!(value = %value, "Ignoring invalid {}", ENV_QUIET),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "compute-sales")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
