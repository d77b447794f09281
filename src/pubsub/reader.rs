use newsstand_error::{NotifyError, ValidationError};
use tracing::info;

use super::{
    subscriber::validate_notification, DisplayName, Subscriber, SubscriberId, SubscriberKind,
    NOTICE_TARGET,
};

/// Частный читатель: получает персональное уведомление о выпуске.
#[derive(Debug)]
pub struct Reader {
    id: SubscriberId,
    name: DisplayName,
}

impl Reader {
    /// Создаёт читателя. Пустое имя отклоняется с
    /// [`ValidationError::EmptyName`].
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: SubscriberId::new(),
            name: DisplayName::parse("Reader", name)?,
        })
    }

    pub fn kind(&self) -> SubscriberKind {
        SubscriberKind::Reader
    }

    /// Текст персонального уведомления.
    pub fn notice(
        &self,
        publisher: &str,
        issue: &str,
    ) -> String {
        format!("{} received notification: {publisher} - \"{issue}\"", self.name)
    }
}

impl Subscriber for Reader {
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
            "📧 {}",
            self.notice(publisher, issue)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture::capture_logs;

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Reader::new("").unwrap_err(),
            ValidationError::empty_name("Reader")
        );
        assert!(Reader::new("   ").is_err());
    }

    /// Тест проверяет, что два читателя с одинаковым именем различаются
    /// по идентичности.
    #[test]
    fn test_same_name_distinct_identity() {
        let a = Reader::new("John").unwrap();
        let b = Reader::new("John").unwrap();
        assert_eq!(a.name(), b.name());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.kind(), SubscriberKind::Reader);
    }

    /// Тест проверяет, что уведомление попадает в лог с целевым target.
    #[test]
    fn test_notify_emits_personal_notice() {
        let reader = Reader::new("John").unwrap();
        let logs = capture_logs(|| {
            reader.notify("Tech Weekly", "Issue 1").unwrap();
        });
        assert!(logs.contains("John received notification: Tech Weekly - \"Issue 1\""));
        assert!(logs.contains(NOTICE_TARGET));
    }

    #[test]
    fn test_notify_rejects_empty_arguments() {
        let reader = Reader::new("John").unwrap();
        assert_eq!(
            reader.notify("", "Issue 1"),
            Err(NotifyError::Validation(ValidationError::EmptyNotification))
        );
        assert_eq!(
            reader.notify("Tech Weekly", ""),
            Err(NotifyError::Validation(ValidationError::EmptyNotification))
        );
    }
}
