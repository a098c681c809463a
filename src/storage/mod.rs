//! Persistence collaborator for subscriptions.
//!
//! [`PostgresSubscriptionStore`] computes sums with a single SQL call, while
//! [`InMemorySubscriptionStore`] scans its records with [`crate::aggregation`].
//! Both must agree on every filter.

use crate::domain::{NewSubscription, Subscription, SumFilter};
use axum::async_trait;
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::InMemorySubscriptionStore;
pub use postgres::PostgresSubscriptionStore;

#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    async fn create(&self, subscription: &NewSubscription) -> Result<Uuid, StorageError>;

    async fn read(&self, id: Uuid) -> Result<Subscription, StorageError>;

    /// Replaces every field of the subscription, keeping its id.
    async fn update(&self, id: Uuid, subscription: &NewSubscription) -> Result<(), StorageError>;

    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;

    /// All subscriptions ordered by start period, then id.
    async fn list(&self) -> Result<Vec<Subscription>, StorageError>;

    async fn sum(&self, filter: &SumFilter) -> Result<i64, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Subscription `{0}` not found")]
    NotFound(Uuid),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}
