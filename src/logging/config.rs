use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Формат вывода логов на консоль.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Многострочный человекочитаемый формат.
    Pretty,
    /// Одна строка на событие.
    #[default]
    Compact,
    /// JSON, по объекту на строку.
    Json,
}

/// Настройки файлового sink'а (ежедневная ротация).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FileSinkConfig {
    pub enabled: bool,
    pub directory: PathBuf,
    pub file_name: String,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Директива `EnvFilter` ("info", "newsstand=debug,warn", ...).
    /// Переменная `RUST_LOG` имеет приоритет.
    pub level: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub with_target: bool,
    pub file: FileSinkConfig,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: PathBuf::from("logs"),
            file_name: "newsstand.log".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            with_ansi: true,
            with_target: false,
            file: FileSinkConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Директива фильтра из конфигурации.
    pub fn filter_directive(&self) -> &str {
        self.level.trim()
    }

    /// Проверяет директиву фильтра и настройки файлового sink'а.
    pub fn validate(&self) -> Result<(), LoggingError> {
        EnvFilter::try_new(self.filter_directive()).map_err(|e| {
            LoggingError::InvalidDirective {
                directive: self.level.clone(),
                reason: e.to_string(),
            }
        })?;
        if self.file.enabled && self.file.file_name.trim().is_empty() {
            return Err(LoggingError::EmptyFileName);
        }
        Ok(())
    }

    /// Создаёт каталог для файлового sink'а, если он включён.
    pub fn ensure_log_dir(&self) -> Result<(), LoggingError> {
        if self.file.enabled {
            fs::create_dir_all(&self.file.directory)?;
        }
        Ok(())
    }
}
