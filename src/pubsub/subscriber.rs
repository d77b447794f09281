use std::{fmt, sync::Arc};

use newsstand_error::{NotifyError, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Library, Reader};

/// Target для событий `tracing`, которыми подписчики сообщают о получении
/// выпуска.
pub const NOTICE_TARGET: &str = "newsstand::notice";

/// Разделяемая ссылка на подписчика.
///
/// Издание не владеет подписчиками: один и тот же подписчик может быть
/// зарегистрирован в нескольких изданиях одновременно.
pub type SharedSubscriber = Arc<dyn Subscriber>;

/// Непрозрачный идентификатор подписчика.
///
/// Выдаётся при создании и определяет идентичность в реестре: два разных
/// подписчика с одинаковым именем считаются разными.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(Uuid);

/// Вид подписчика (используется конфигурацией каталога).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberKind {
    /// Частный читатель.
    Reader,
    /// Библиотека: получает выпуск для множества читателей.
    Library,
}

/// Подписчик, способный получать уведомления о новых выпусках.
///
/// Реализации должны быть быстрыми и не блокировать поток: `notify`
/// вызывается синхронно из [`Magazine::publish`](super::Magazine::publish).
/// Ошибка (или паника) одного подписчика не мешает доставке остальным.
pub trait Subscriber: Send + Sync {
    /// Идентичность подписчика в реестре.
    fn id(&self) -> SubscriberId;

    /// Отображаемое имя.
    fn name(&self) -> &str;

    /// Обрабатывает уведомление о выпуске `issue` издания `publisher`.
    fn notify(
        &self,
        publisher: &str,
        issue: &str,
    ) -> Result<(), NotifyError>;
}

impl SubscriberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl SubscriberKind {
    /// Создаёт подписчика нужного вида.
    pub fn build(
        self,
        name: &str,
    ) -> Result<SharedSubscriber, ValidationError> {
        Ok(match self {
            Self::Reader => Arc::new(Reader::new(name)?),
            Self::Library => Arc::new(Library::new(name)?),
        })
    }
}

/// Общая проверка аргументов `notify` для встроенных подписчиков.
pub(crate) fn validate_notification(
    publisher: &str,
    issue: &str,
) -> Result<(), ValidationError> {
    if publisher.trim().is_empty() || issue.trim().is_empty() {
        return Err(ValidationError::EmptyNotification);
    }
    Ok(())
}
