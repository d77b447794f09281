use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::atomic::{AtomicUsize, Ordering},
};

use newsstand_error::{ErrorExt, NotifyError, ValidationError};
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use super::{
    DeliveryReport, DeliveryStats, DisplayName, IssueTitle, RegisterOutcome, SharedSubscriber,
    Subscriber, UnregisterOutcome,
};

/// Издание (publisher): реестр подписчиков и движок доставки выпусков.
///
/// Поддерживает:
/// - упорядоченный реестр без дубликатов по идентичности подписчика;
/// - доставку выпуска по снимку реестра, в порядке регистрации;
/// - изоляцию ошибок и паник отдельных подписчиков;
/// - счётчики публикаций и неудачных доставок.
///
/// Реестр защищён одним мьютексом. `publish` снимает копию списка под
/// блокировкой и отпускает её до вызова подписчиков, поэтому медленный или
/// реентерабельный подписчик не блокирует изменения реестра.
pub struct Magazine {
    /// Имя издания, неизменяемое после создания.
    name: DisplayName,
    /// Подписчики в порядке регистрации.
    subscribers: Mutex<Vec<SharedSubscriber>>,
    /// Количество вызовов `publish`, прошедших валидацию.
    published: AtomicUsize,
    /// Количество неудачных доставок отдельным подписчикам.
    failed_deliveries: AtomicUsize,
}

impl Magazine {
    /// Создаёт издание. Пустое имя отклоняется с
    /// [`ValidationError::EmptyName`].
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: DisplayName::parse("Magazine", name)?,
            subscribers: Mutex::new(Vec::new()),
            published: AtomicUsize::new(0),
            failed_deliveries: AtomicUsize::new(0),
        })
    }

    /// Имя издания.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Регистрирует подписчика в конце списка.
    ///
    /// Если подписчик с той же идентичностью уже есть, ничего не меняет и
    /// возвращает [`RegisterOutcome::AlreadySubscribed`].
    pub fn register(
        &self,
        subscriber: SharedSubscriber,
    ) -> RegisterOutcome {
        let mut subscribers = self.subscribers.lock();
        if subscribers.iter().any(|s| s.id() == subscriber.id()) {
            warn!(
                magazine = %self.name,
                subscriber = subscriber.name(),
                "Subscriber is already subscribed"
            );
            return RegisterOutcome::AlreadySubscribed;
        }
        info!(
            magazine = %self.name,
            subscriber = subscriber.name(),
            "Subscriber subscribed"
        );
        subscribers.push(subscriber);
        RegisterOutcome::Subscribed
    }

    /// Удаляет подписчика, сохраняя порядок остальных.
    ///
    /// Если подписчика нет, состояние не меняется и возвращается
    /// [`UnregisterOutcome::NotSubscribed`].
    pub fn unregister(
        &self,
        subscriber: &dyn Subscriber,
    ) -> UnregisterOutcome {
        let mut subscribers = self.subscribers.lock();
        match subscribers.iter().position(|s| s.id() == subscriber.id()) {
            Some(index) => {
                subscribers.remove(index);
                info!(
                    magazine = %self.name,
                    subscriber = subscriber.name(),
                    "Subscriber unsubscribed"
                );
                UnregisterOutcome::Unsubscribed
            }
            None => {
                warn!(
                    magazine = %self.name,
                    subscriber = subscriber.name(),
                    "Subscriber is not subscribed"
                );
                UnregisterOutcome::NotSubscribed
            }
        }
    }

    /// Проверяет, зарегистрирован ли подписчик (по идентичности).
    pub fn is_subscribed(
        &self,
        subscriber: &dyn Subscriber,
    ) -> bool {
        self.subscribers
            .lock()
            .iter()
            .any(|s| s.id() == subscriber.id())
    }

    /// Количество зарегистрированных подписчиков.
    pub fn count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Снимок имён подписчиков в порядке регистрации.
    pub fn names(&self) -> Vec<String> {
        self.subscribers
            .lock()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Публикует выпуск и доставляет его всем подписчикам из снимка реестра.
    ///
    /// Работает в три этапа:
    /// 1. Проверяет и обрезает заголовок (пустой -> `ValidationError`,
    ///    реестр и счётчики не меняются)
    /// 2. Снимает копию реестра и отпускает блокировку
    /// 3. Вызывает `notify` каждого подписчика; ошибки и паники логируются,
    ///    учитываются в отчёте и не прерывают доставку остальным
    pub fn publish(
        &self,
        issue: &str,
    ) -> Result<DeliveryReport, ValidationError> {
        let issue = IssueTitle::parse(issue)?;
        let snapshot = self.snapshot();
        self.published.fetch_add(1, Ordering::Relaxed);

        info!(
            magazine = %self.name,
            issue = %issue,
            subscribers = snapshot.len(),
            "Publishing new issue"
        );

        let mut report = DeliveryReport::new(self.name.as_str(), issue.as_str());
        for subscriber in &snapshot {
            match deliver(subscriber.as_ref(), self.name(), issue.as_str()) {
                Ok(()) => report.record_delivered(subscriber.name()),
                Err(err) => {
                    self.failed_deliveries.fetch_add(1, Ordering::Relaxed);
                    error!(
                        magazine = %self.name,
                        subscriber = subscriber.name(),
                        status = %err.status_code(),
                        "Failed to notify {}: {err}",
                        subscriber.name()
                    );
                    report.record_failed(subscriber.name(), &err);
                }
            }
        }

        debug!(
            magazine = %self.name,
            delivered = report.delivered.len(),
            failed = report.failed.len(),
            "Delivery pass finished"
        );
        Ok(report)
    }

    /// Текущие значения счётчиков.
    pub fn stats(&self) -> DeliveryStats {
        DeliveryStats {
            published: self.published.load(Ordering::Relaxed),
            failed_deliveries: self.failed_deliveries.load(Ordering::Relaxed),
        }
    }

    fn snapshot(&self) -> Vec<SharedSubscriber> {
        self.subscribers.lock().clone()
    }
}

impl fmt::Debug for Magazine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Magazine")
            .field("name", &self.name.as_str())
            .field("subscribers", &self.names())
            .field("stats", &self.stats())
            .finish()
    }
}

/// Вызывает `notify` одного подписчика, превращая панику в
/// [`NotifyError::Panicked`].
fn deliver(
    subscriber: &dyn Subscriber,
    magazine: &str,
    issue: &str,
) -> Result<(), NotifyError> {
    match panic::catch_unwind(AssertUnwindSafe(|| subscriber.notify(magazine, issue))) {
        Ok(result) => result,
        Err(payload) => Err(NotifyError::Panicked {
            subscriber: subscriber.name().to_string(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
