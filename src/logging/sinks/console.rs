use std::io::{self, Stdout};

use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{config::LoggingConfig, formatter};

/// Console layer (stdout) с конфигурацией.
pub fn layer_with_config<S>(config: &LoggingConfig) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    // Явно указываем writer как fn() -> Stdout
    let writer: fn() -> Stdout = io::stdout;
    formatter::build_formatter_from_config(config, writer)
}

#[cfg(test)]
mod tests {
    use tracing::info;
    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;
    use crate::logging::config::LogFormat;

    /// Тест проверят, что console layer для каждого формата можно
    /// зарегистрировать и что логирование не приводит к панике.
    #[test]
    fn test_layer_registers_and_logs_without_panic() {
        for format in [LogFormat::Compact, LogFormat::Pretty, LogFormat::Json] {
            let cfg = LoggingConfig {
                format,
                ..Default::default()
            };
            let subscriber = Registry::default().with(layer_with_config(&cfg));
            tracing::subscriber::with_default(subscriber, || {
                info!("test message from console layer");
            });
        }
    }
}
