use newsstand_error::ValidationError;
use thiserror::Error;

use super::LoggingError;

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Ошибки загрузки и проверки конфигурации.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(#[from] ValidationError),

    #[error("Invalid logging configuration: {0}")]
    Logging(#[from] LoggingError),
}
