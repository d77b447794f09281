use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{fmt, registry::LookupSpan, Layer};

use crate::logging::config::LoggingConfig;

/// Файловый layer с ежедневной ротацией.
///
/// `WorkerGuard` нужно держать живым, пока идёт запись: при drop он
/// сбрасывает буфер.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> (Box<dyn Layer<S> + Send + Sync>, WorkerGuard)
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let file_appender = daily(&config.file.directory, &config.file.file_name);
    let (non_blocking_writer, guard) = non_blocking(file_appender);

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking_writer);

    (Box::new(layer), guard)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;

    /// Тест проверяет, что событие попадает в файл в каталоге логов после
    /// drop'а guard'а.
    #[test]
    fn test_file_layer_writes_to_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = LoggingConfig::default();
        cfg.file.enabled = true;
        cfg.file.directory = tmp.path().to_path_buf();
        cfg.file.file_name = "test.log".to_string();

        let (layer, guard) = layer_with_config::<Registry>(&cfg);
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("written to file");
        });
        drop(guard);

        let contents: String = fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("test.log"))
            .map(|e| fs::read_to_string(e.path()).unwrap())
            .collect();
        assert!(contents.contains("written to file"), "{contents}");
    }
}
