use std::any::Any;

use newsstand_error::{ErrorExt, StatusCode, ValidationError};
use thiserror::Error;

/// Ошибки операций каталога по номерам из меню.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Magazine #{0} not found")]
    UnknownMagazine(usize),

    #[error("Subscriber #{0} not found")]
    UnknownSubscriber(usize),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ErrorExt for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownMagazine(_) | Self::UnknownSubscriber(_) => StatusCode::NotFound,
            Self::Validation(e) => e.status_code(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
