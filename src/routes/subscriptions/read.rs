use super::{error::SubscriptionsError, parse_subscription_id};
use crate::{app_state::AppState, domain::Subscription};
use axum::{
    extract::{Path, State},
    Json,
};

#[tracing::instrument(name = "Fetching a subscription", skip(app_state))]
pub(super) async fn read_subscription(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Subscription>, SubscriptionsError> {
    let id = parse_subscription_id(&id)?;
    let subscription = app_state.store.read(id).await?;

    Ok(Json(subscription))
}
