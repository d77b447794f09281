#![allow(dead_code)]

use std::sync::Arc;

use newsstand::{NotifyError, SharedSubscriber, Subscriber, SubscriberId};
use parking_lot::Mutex;

/// Подписчик, запоминающий полученные выпуски.
pub struct Recorder {
    id: SubscriberId,
    name: String,
    received: Mutex<Vec<(String, String)>>,
}

impl Recorder {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            id: SubscriberId::new(),
            name: name.to_string(),
            received: Mutex::new(Vec::new()),
        })
    }

    /// Заголовки полученных выпусков по порядку.
    pub fn issues(&self) -> Vec<String> {
        self.received
            .lock()
            .iter()
            .map(|(_, issue)| issue.clone())
            .collect()
    }

    pub fn received(&self) -> Vec<(String, String)> {
        self.received.lock().clone()
    }
}

impl Subscriber for Recorder {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn notify(
        &self,
        publisher: &str,
        issue: &str,
    ) -> Result<(), NotifyError> {
        self.received
            .lock()
            .push((publisher.to_string(), issue.to_string()));
        Ok(())
    }
}

/// Как падает [`Faulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Error,
    Panic,
}

/// Подписчик, который всегда проваливает доставку.
pub struct Faulty {
    id: SubscriberId,
    fault: Fault,
}

impl Faulty {
    pub fn new(fault: Fault) -> Arc<Self> {
        Arc::new(Self {
            id: SubscriberId::new(),
            fault,
        })
    }
}

impl Subscriber for Faulty {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn name(&self) -> &str {
        "Faulty"
    }

    fn notify(
        &self,
        _publisher: &str,
        _issue: &str,
    ) -> Result<(), NotifyError> {
        match self.fault {
            Fault::Error => Err(NotifyError::rejected("Faulty", "mailbox is full")),
            Fault::Panic => panic!("mailbox exploded"),
        }
    }
}

pub fn shared<S: Subscriber + 'static>(subscriber: &Arc<S>) -> SharedSubscriber {
    Arc::clone(subscriber) as SharedSubscriber
}
