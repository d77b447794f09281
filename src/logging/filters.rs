use tracing_subscriber::EnvFilter;

use crate::{error::LoggingError, logging::config::LoggingConfig};

/// Строит фильтр: `RUST_LOG`, если задана и корректна, иначе директива из
/// конфигурации.
pub fn build_filter_from_config(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => Ok(env_filter),
        Err(_) => {
            let directive = config.filter_directive();
            EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidDirective {
                directive: directive.to_string(),
                reason: e.to_string(),
            })
        }
    }
}
