use std::{fmt, sync::Arc};

use tracing::debug;

use crate::{
    config::Settings,
    error::CatalogError,
    pubsub::{
        DeliveryReport, Magazine, RegisterOutcome, SharedSubscriber, Subscriber,
        UnregisterOutcome,
    },
};

/// Каталог изданий и подписчиков, с которыми работает меню.
///
/// Номера в операциях 1-based, в порядке, заданном настройками.
pub struct Catalog {
    magazines: Vec<Magazine>,
    subscribers: Vec<SharedSubscriber>,
}

impl Catalog {
    pub fn new(
        magazines: Vec<Magazine>,
        subscribers: Vec<SharedSubscriber>,
    ) -> Self {
        Self {
            magazines,
            subscribers,
        }
    }

    /// Собирает каталог из настроек.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let magazines = settings
            .magazines
            .iter()
            .map(|name| Magazine::new(name))
            .collect::<Result<Vec<_>, _>>()?;
        let subscribers = settings
            .subscribers
            .iter()
            .map(|s| s.kind.build(&s.name))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            magazines = magazines.len(),
            subscribers = subscribers.len(),
            "Catalog built"
        );
        Ok(Self::new(magazines, subscribers))
    }

    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn subscribers(&self) -> &[SharedSubscriber] {
        &self.subscribers
    }

    /// Издание по номеру из меню (с 1).
    pub fn magazine(
        &self,
        number: usize,
    ) -> Result<&Magazine, CatalogError> {
        number
            .checked_sub(1)
            .and_then(|i| self.magazines.get(i))
            .ok_or(CatalogError::UnknownMagazine(number))
    }

    /// Подписчик по номеру из меню (с 1).
    pub fn subscriber(
        &self,
        number: usize,
    ) -> Result<&SharedSubscriber, CatalogError> {
        number
            .checked_sub(1)
            .and_then(|i| self.subscribers.get(i))
            .ok_or(CatalogError::UnknownSubscriber(number))
    }

    /// Подписывает подписчика `subscriber` на издание `magazine`.
    pub fn subscribe(
        &self,
        subscriber: usize,
        magazine: usize,
    ) -> Result<RegisterOutcome, CatalogError> {
        let magazine = self.magazine(magazine)?;
        let subscriber = self.subscriber(subscriber)?;
        Ok(magazine.register(Arc::clone(subscriber)))
    }

    pub fn unsubscribe(
        &self,
        subscriber: usize,
        magazine: usize,
    ) -> Result<UnregisterOutcome, CatalogError> {
        let magazine = self.magazine(magazine)?;
        let subscriber = self.subscriber(subscriber)?;
        Ok(magazine.unregister(subscriber.as_ref()))
    }

    pub fn publish(
        &self,
        magazine: usize,
        issue: &str,
    ) -> Result<DeliveryReport, CatalogError> {
        Ok(self.magazine(magazine)?.publish(issue)?)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let subscribers: Vec<&str> = self.subscribers.iter().map(|s| s.name()).collect();
        f.debug_struct("Catalog")
            .field("magazines", &self.magazines)
            .field("subscribers", &subscribers)
            .finish()
    }
}
