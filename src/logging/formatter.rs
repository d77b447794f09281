//! Форматтеры событий: pretty, compact и json.

use tracing_subscriber::layer::Layer as LayerTrait;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    registry::LookupSpan,
};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Build formatter на основе конфигурации.
/// Возвращаем boxed trait-объект, чтобы стереть конкретный тип формата
/// (json/pretty/compact).
pub fn build_formatter_from_config<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer)
                .with_target(config.with_target);
            Box::new(layer)
        }
        LogFormat::Pretty => {
            let pretty_fmt = fmt::format().pretty();
            let layer = fmt::layer()
                .event_format(pretty_fmt)
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            Box::new(layer)
        }
        LogFormat::Compact => {
            let compact_fmt = fmt::format().compact();
            let layer = fmt::layer()
                .event_format(compact_fmt)
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_thread_ids(false)
                .with_line_number(false);
            Box::new(layer)
        }
    }
}
