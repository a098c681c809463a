use super::{NewSubscription, Period, Price, ServiceName};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    #[serde(rename = "sub_id")]
    #[sqlx(rename = "sub_id")]
    pub id: Uuid,
    #[serde(rename = "service_name")]
    #[sqlx(rename = "service_name")]
    pub service: ServiceName,
    pub price: Price,
    pub user_id: Uuid,
    #[serde(rename = "start_date")]
    #[sqlx(rename = "start_date")]
    pub start: Period,
    #[serde(rename = "end_date")]
    #[sqlx(rename = "end_date")]
    pub end: Option<Period>,
}

impl Subscription {
    pub fn from_new(id: Uuid, subscription: NewSubscription) -> Self {
        Self {
            id,
            service: subscription.service,
            price: subscription.price,
            user_id: subscription.user_id,
            start: subscription.start,
            end: subscription.end,
        }
    }
}
