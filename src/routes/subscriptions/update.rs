use super::{error::SubscriptionsError, parse_subscription_id};
use crate::{
    app_state::AppState,
    domain::{NewSubscription, SubscriptionData},
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

#[tracing::instrument(name = "Replacing a subscription", skip(app_state, body))]
pub(super) async fn update_subscription(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SubscriptionData>, JsonRejection>,
) -> Result<(), SubscriptionsError> {
    let id = parse_subscription_id(&id)?;
    let Json(data) = body?;
    let subscription = NewSubscription::try_from(data)?;
    app_state.store.update(id, &subscription).await?;

    Ok(())
}
