use crate::{app_state::AppState, domain::ValidationError};
use axum::{routing::get, Router};
use create::create_subscription;
use delete::delete_subscription;
use list::list_subscriptions;
use read::read_subscription;
use sum::sum_subscriptions;
use update::update_subscription;
use uuid::Uuid;

mod create;
mod delete;
mod error;
mod list;
mod read;
mod sum;
mod update;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subs", get(list_subscriptions).post(create_subscription))
        .route("/subs/sum", get(sum_subscriptions))
        .route(
            "/subs/:id",
            get(read_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
}

fn parse_subscription_id(id: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(id).map_err(ValidationError::InvalidSubscriptionId)
}
