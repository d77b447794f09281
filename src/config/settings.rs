use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{
    error::settings::SettingsResult,
    logging::LoggingConfig,
    pubsub::{DisplayName, SubscriberKind},
};

/// Префикс переменных окружения: `NEWSSTAND_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "NEWSSTAND";

/// Описание подписчика в каталоге.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriberSettings {
    pub kind: SubscriberKind,
    pub name: String,
}

/// Настройки приложения.
///
/// Источники в порядке приоритета (последний побеждает):
/// 1. значения по умолчанию (`Settings::default()`);
/// 2. TOML-файл, если передан путь;
/// 3. переменные окружения с префиксом `NEWSSTAND_`, вложенность через `__`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Названия изданий каталога, в порядке нумерации меню.
    pub magazines: Vec<String>,
    /// Подписчики каталога, в порядке нумерации меню.
    pub subscribers: Vec<SubscriberSettings>,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        let reader = |name: &str| SubscriberSettings {
            kind: SubscriberKind::Reader,
            name: name.to_string(),
        };
        let library = |name: &str| SubscriberSettings {
            kind: SubscriberKind::Library,
            name: name.to_string(),
        };
        Self {
            magazines: vec![
                "Tech Weekly".to_string(),
                "Cooking Today".to_string(),
                "Sports Monthly".to_string(),
            ],
            subscribers: vec![
                reader("John"),
                reader("Alice"),
                reader("Bob"),
                library("City Library"),
                library("University Library"),
            ],
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Загружает настройки из значений по умолчанию и окружения.
    pub fn load() -> SettingsResult<Self> {
        Self::load_from(None)
    }

    /// Загружает настройки, дополнительно читая TOML-файл `path`.
    ///
    /// Файл, если указан, обязан существовать.
    pub fn load_from(path: Option<&Path>) -> SettingsResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let cfg = builder
            // Переменные окружения с префиксом NEWSSTAND_
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Проверяет имена каталога и конфигурацию логирования.
    pub fn validate(&self) -> SettingsResult<()> {
        for name in &self.magazines {
            DisplayName::parse("Magazine", name)?;
        }
        for subscriber in &self.subscribers {
            let entity = match subscriber.kind {
                SubscriberKind::Reader => "Reader",
                SubscriberKind::Library => "Library",
            };
            DisplayName::parse(entity, &subscriber.name)?;
        }
        self.logging.validate()?;
        Ok(())
    }
}
