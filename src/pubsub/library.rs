use newsstand_error::{NotifyError, ValidationError};
use tracing::info;

use super::{
    subscriber::validate_notification, DisplayName, Subscriber, SubscriberId, SubscriberKind,
    NOTICE_TARGET,
};

/// Библиотека: заказывает выпуск для публичного доступа.
///
/// Для реестра ничем не отличается от [`Reader`](super::Reader), разница
/// только в тексте уведомления.
#[derive(Debug)]
pub struct Library {
    id: SubscriberId,
    name: DisplayName,
}

impl Library {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: SubscriberId::new(),
            name: DisplayName::parse("Library", name)?,
        })
    }

    pub fn kind(&self) -> SubscriberKind {
        SubscriberKind::Library
    }

    pub fn notice(
        &self,
        publisher: &str,
        issue: &str,
    ) -> String {
        format!(
            "{} ordered: {publisher} - \"{issue}\" for public access",
            self.name
        )
    }
}

impl Subscriber for Library {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn notify(
        &self,
        publisher: &str,
        issue: &str,
    ) -> Result<(), NotifyError> {
        validate_notification(publisher, issue)?;
        info!(
            target: NOTICE_TARGET,
            subscriber = %self.name,
            magazine = publisher,
            issue,
            "📚 {}",
            self.notice(publisher, issue)
        );
        Ok(())
    }
}
