//! # Application Errors
//!
//! Everything that can stop a run, and the exit code each one maps to.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / toml::de::Error                       │
//! │  sales_core::CoreError                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (this module) ← Adds path context                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  main.rs prints "Error: ..." and exits with AppError::exit_code()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use sales_core::CoreError;
use thiserror::Error;

/// Errors surfaced by a compute-sales run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input file does not exist.
    #[error("File {} not found.", .0.display())]
    FileNotFound(PathBuf),

    /// Input file is not valid JSON.
    #[error("Invalid JSON format in file {}.", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input file is valid JSON but not a list of records.
    #[error("Expected a JSON array of records in file {}.", .0.display())]
    NotAnArray(PathBuf),

    /// One or both inputs hold no records.
    #[error("One or both input files are empty or invalid.")]
    EmptyInput,

    /// Reading an input file failed for a reason other than absence.
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record is malformed; the computation was aborted.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The report file could not be written.
    #[error("Could not write report to {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    /// Reserved for clap's own usage errors.
    pub const USAGE: i32 = 2;
    pub const INPUT_ERROR: i32 = 3;
    pub const DATA_ERROR: i32 = 4;
    pub const CONFIG_ERROR: i32 = 5;
    pub const WRITE_ERROR: i32 = 6;
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::FileNotFound(_)
            | AppError::InvalidJson { .. }
            | AppError::NotAnArray(_)
            | AppError::EmptyInput => exit_code::INPUT_ERROR,
            AppError::Core(_) => exit_code::DATA_ERROR,
            AppError::Config(_) => exit_code::CONFIG_ERROR,
            AppError::ReportWrite { .. } => exit_code::WRITE_ERROR,
            AppError::Io { .. } => exit_code::GENERAL_ERROR,
        }
    }
}
