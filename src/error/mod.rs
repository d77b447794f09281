pub mod catalog;
pub mod logging;
pub mod settings;

pub use catalog::CatalogError;
pub use logging::LoggingError;
pub use newsstand_error::{ErrorExt, NotifyError, StatusCode, ValidationError};
pub use settings::SettingsError;
