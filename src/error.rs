use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Failures that end the program before or during the game loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not create log directory {path}: {source}")]
    LogDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialized: {0}")]
    Logger(#[from] SetLoggerError),
}
