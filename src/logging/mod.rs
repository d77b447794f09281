pub mod config;
mod filters;
mod formatter;
pub mod handle;
pub mod sinks;

#[cfg(test)]
pub(crate) mod capture;

pub use config::{FileSinkConfig, LogFormat, LoggingConfig};
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LoggingError;

/// Инициализация логирования с конфигурацией.
///
/// Собирает `tracing_subscriber::registry()` из фильтра, console layer'а и
/// (опционально) файлового layer'а и устанавливает его глобально. Повторный
/// вызов возвращает [`LoggingError::AlreadyInitialized`].
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingHandle, LoggingError> {
    config.validate()?;
    config.ensure_log_dir()?;

    let env_filter = filters::build_filter_from_config(config)?;
    let mut layers = Vec::new();

    // Console layer
    layers.push(sinks::console::layer_with_config(config));

    // File layer
    let file_guard = if config.file.enabled {
        let (file_layer, guard) = sinks::file::layer_with_config(config);
        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.filter_directive(),
        format = ?config.format,
        file_enabled = config.file.enabled,
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
