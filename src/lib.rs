/// Каталог изданий и подписчиков с 1-based нумерацией для меню.
pub mod catalog;
/// Командная строка: меню, демо, разбор аргументов.
pub mod cli;
/// Загрузка настроек из файла и окружения.
pub mod config;
/// Ошибки крейта и реэкспорт `newsstand-error`.
pub mod error;
/// Логирование: фильтры, форматтеры, sinks.
pub mod logging;
/// Издания, подписчики и доставка выпусков.
pub mod pubsub;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

pub use catalog::Catalog;
pub use config::{Settings, SubscriberSettings};
pub use error::{
    CatalogError, ErrorExt, LoggingError, NotifyError, SettingsError, StatusCode,
    ValidationError,
};
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
pub use pubsub::{
    DeliveryReport, DeliveryStats, FailedDelivery, Library, Magazine, Reader, RegisterOutcome,
    SharedSubscriber, Subscriber, SubscriberId, SubscriberKind, UnregisterOutcome,
};
