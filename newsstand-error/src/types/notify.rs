use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode, ValidationError};

/// Ошибки доставки одного уведомления одному подписчику.
///
/// Перехватываются на границе движка доставки: логируются, учитываются в
/// статистике и никогда не прерывают доставку остальным подписчикам.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// Подписчик отклонил некорректные аргументы.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Подписчик не смог обработать уведомление.
    #[error("{subscriber} rejected the notification: {reason}")]
    Rejected { subscriber: String, reason: String },

    /// Подписчик запаниковал внутри `notify`.
    #[error("{subscriber} panicked while handling the notification: {message}")]
    Panicked { subscriber: String, message: String },
}

impl NotifyError {
    pub fn rejected(
        subscriber: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Rejected {
            subscriber: subscriber.into(),
            reason: reason.into(),
        }
    }
}

impl ErrorExt for NotifyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(e) => e.status_code(),
            Self::Rejected { .. } => StatusCode::DeliveryFailed,
            Self::Panicked { .. } => StatusCode::SubscriberPanicked,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
