use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки валидации входных данных.
///
/// Возвращаются конструкторами имён, `publish` и `notify` синхронно,
/// непосредственно вызывающему коду.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Пустое (или состоящее из пробелов) отображаемое имя.
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    /// Пустой заголовок выпуска.
    #[error("Issue title cannot be empty")]
    EmptyIssueTitle,

    /// Уведомление без имени издания или без выпуска.
    #[error("Magazine name and issue cannot be empty")]
    EmptyNotification,
}

impl ValidationError {
    pub fn empty_name(entity: &'static str) -> Self {
        Self::EmptyName { entity }
    }
}

impl ErrorExt for ValidationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyName { .. } => StatusCode::InvalidArgs,
            Self::EmptyIssueTitle | Self::EmptyNotification => StatusCode::InvalidValue,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
