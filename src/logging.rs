use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;

const APP_DIR_NAME: &str = "arcade-snake";
const LOG_FILE_NAME: &str = "arcade-snake.log";

/// Verbosity accepted on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Returns the platform-correct log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Installs a file logger. The terminal belongs to the game, so nothing is
/// ever logged to stdout or stderr.
///
/// Returns the path being written, or `None` when logging is off.
pub fn init(level: LogLevel, path: Option<PathBuf>) -> Result<Option<PathBuf>, AppError> {
    if level == LogLevel::Off {
        return Ok(None);
    }

    let path = path.unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;
    WriteLogger::init(level.into(), Config::default(), file)?;

    Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AppError::LogDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })
}
