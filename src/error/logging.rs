use std::io;

use thiserror::Error;

/// Ошибки инициализации логирования.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("Log file name cannot be empty")]
    EmptyFileName,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to install the global subscriber: {0}")]
    AlreadyInitialized(String),
}
