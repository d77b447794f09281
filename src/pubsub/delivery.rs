use newsstand_error::{ErrorExt, NotifyError, StatusCode};

/// Результат регистрации подписчика.
///
/// Повторная регистрация не является ошибкой: это информационный статус.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Subscribed,
    AlreadySubscribed,
}

/// Результат отмены подписки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnregisterOutcome {
    Unsubscribed,
    NotSubscribed,
}

/// Неудачная доставка одному подписчику.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDelivery {
    pub subscriber: String,
    pub status: StatusCode,
    pub reason: String,
}

/// Итог одного вызова `publish`.
///
/// Не хранится изданием: история выпусков не ведётся.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Имя издания.
    pub magazine: String,
    /// Обрезанный заголовок выпуска.
    pub issue: String,
    /// Имена подписчиков, получивших выпуск, в порядке регистрации.
    pub delivered: Vec<String>,
    /// Подписчики, на которых доставка упала.
    pub failed: Vec<FailedDelivery>,
}

/// Счётчики издания.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    /// Количество успешных (прошедших валидацию) вызовов `publish`.
    pub published: usize,
    /// Количество неудачных доставок отдельным подписчикам.
    pub failed_deliveries: usize,
}

impl DeliveryReport {
    pub fn new(
        magazine: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            magazine: magazine.into(),
            issue: issue.into(),
            delivered: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub(crate) fn record_delivered(
        &mut self,
        subscriber: &str,
    ) {
        self.delivered.push(subscriber.to_string());
    }

    pub(crate) fn record_failed(
        &mut self,
        subscriber: &str,
        error: &NotifyError,
    ) {
        self.failed.push(FailedDelivery {
            subscriber: subscriber.to_string(),
            status: error.status_code(),
            reason: error.to_string(),
        });
    }

    /// Сколько подписчиков было в снимке реестра.
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }

    /// Все подписчики получили выпуск.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
