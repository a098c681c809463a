use super::{StorageError, SubscriptionStore};
use crate::domain::{NewSubscription, Subscription, SumFilter};
use anyhow::Context;
use axum::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

pub struct PostgresSubscriptionStore {
    db_pool: PgPool,
}

impl PostgresSubscriptionStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionStore for PostgresSubscriptionStore {
    #[tracing::instrument(name = "Saving new subscription in the database", skip_all)]
    async fn create(&self, subscription: &NewSubscription) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO subscriptions (sub_id, service_name, price, user_id, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(subscription.service.as_ref())
        .bind(subscription.price.value())
        .bind(subscription.user_id)
        .bind(subscription.start)
        .bind(subscription.end)
        .execute(&self.db_pool)
        .await
        .context("Failed to insert subscription")?;

        Ok(id)
    }

    #[tracing::instrument(name = "Fetching subscription from the database", skip(self))]
    async fn read(&self, id: Uuid) -> Result<Subscription, StorageError> {
        sqlx::query_as::<_, Subscription>(
            r#"
            SELECT sub_id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            WHERE sub_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .context("Failed to fetch subscription")?
        .ok_or(StorageError::NotFound(id))
    }

    #[tracing::instrument(
        name = "Updating subscription in the database",
        skip(self, subscription)
    )]
    async fn update(&self, id: Uuid, subscription: &NewSubscription) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions
            SET service_name = $1, price = $2, user_id = $3, start_date = $4, end_date = $5
            WHERE sub_id = $6
            "#,
        )
        .bind(subscription.service.as_ref())
        .bind(subscription.price.value())
        .bind(subscription.user_id)
        .bind(subscription.start)
        .bind(subscription.end)
        .bind(id)
        .execute(&self.db_pool)
        .await
        .context("Failed to update subscription")?;

        match result.rows_affected() {
            0 => Err(StorageError::NotFound(id)),
            _ => Ok(()),
        }
    }

    #[tracing::instrument(name = "Deleting subscription from the database", skip(self))]
    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE sub_id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await
            .context("Failed to delete subscription")?;

        match result.rows_affected() {
            0 => Err(StorageError::NotFound(id)),
            _ => Ok(()),
        }
    }

    #[tracing::instrument(name = "Listing subscriptions from the database", skip(self))]
    async fn list(&self) -> Result<Vec<Subscription>, StorageError> {
        let subscriptions = sqlx::query_as::<_, Subscription>(
            r#"
            SELECT sub_id, service_name, price, user_id, start_date, end_date
            FROM subscriptions
            ORDER BY start_date, sub_id
            "#,
        )
        .fetch_all(&self.db_pool)
        .await
        .context("Failed to list subscriptions")?;

        Ok(subscriptions)
    }

    #[tracing::instrument(name = "Summing subscriptions in the database", skip(self))]
    async fn sum(&self, filter: &SumFilter) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT sum_in_period($1, $2, $3, $4) AS total")
            .bind(filter.start)
            .bind(filter.end)
            .bind(filter.user_id)
            .bind(filter.service.as_deref())
            .fetch_one(&self.db_pool)
            .await
            .context("Failed to sum subscriptions")?;

        let total = row
            .try_get("total")
            .context("Failed to read subscriptions sum")?;

        Ok(total)
    }
}
