//! Error types for the fallible edges of the crate.
//!
//! The widget itself never fails: bad input degrades to safe defaults. Errors
//! only arise when reading host-supplied configuration or installing a logger.

use thiserror::Error;

/// Host configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid option group config: {0}")]
    Json(#[from] serde_json::Error),
}

/// The file logger could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("a logger is already installed")]
    Init(#[from] log::SetLoggerError),
}
