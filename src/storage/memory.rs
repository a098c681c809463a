use super::{StorageError, SubscriptionStore};
use crate::{
    aggregation,
    domain::{NewSubscription, Subscription, SumFilter},
};
use axum::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store that sums by scanning every record.
#[derive(Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: RwLock<HashMap<Uuid, Subscription>>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionStore for InMemorySubscriptionStore {
    #[tracing::instrument(name = "Saving new subscription in memory", skip_all)]
    async fn create(&self, subscription: &NewSubscription) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        self.subscriptions
            .write()
            .await
            .insert(id, Subscription::from_new(id, subscription.clone()));

        Ok(id)
    }

    #[tracing::instrument(name = "Fetching subscription from memory", skip(self))]
    async fn read(&self, id: Uuid) -> Result<Subscription, StorageError> {
        self.subscriptions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    #[tracing::instrument(name = "Updating subscription in memory", skip(self, subscription))]
    async fn update(&self, id: Uuid, subscription: &NewSubscription) -> Result<(), StorageError> {
        match self.subscriptions.write().await.get_mut(&id) {
            Some(stored) => {
                *stored = Subscription::from_new(id, subscription.clone());
                Ok(())
            }
            None => Err(StorageError::NotFound(id)),
        }
    }

    #[tracing::instrument(name = "Deleting subscription from memory", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        self.subscriptions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(id))
    }

    #[tracing::instrument(name = "Listing subscriptions from memory", skip(self))]
    async fn list(&self) -> Result<Vec<Subscription>, StorageError> {
        let mut subscriptions: Vec<_> = self.subscriptions.read().await.values().cloned().collect();
        subscriptions.sort_by_key(|subscription| (subscription.start, subscription.id));

        Ok(subscriptions)
    }

    #[tracing::instrument(name = "Summing subscriptions in memory", skip(self))]
    async fn sum(&self, filter: &SumFilter) -> Result<i64, StorageError> {
        let total = aggregation::total(self.subscriptions.read().await.values(), filter)
            .ok_or_else(|| anyhow::anyhow!("Subscriptions sum does not fit in 64 bits"))?;

        Ok(total)
    }
}
