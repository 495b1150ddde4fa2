//! File logging for terminal programs.
//!
//! Stdout belongs to the UI, so log records go to a file through
//! `simplelog::WriteLogger`.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::LoggingError;

/// Where and how verbosely to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("choicekit.log"),
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

/// Install a global file logger. Fails if one is already installed.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let file = File::create(&config.path).map_err(|source| LoggingError::Io {
        path: config.path.clone(),
        source,
    })?;
    WriteLogger::init(config.level, Config::default(), file)?;
    log::info!("logging to {} at {}", config.path.display(), config.level);
    Ok(())
}
