use super::{error::SubscriptionsError, parse_subscription_id};
use crate::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

#[tracing::instrument(name = "Deleting a subscription", skip(app_state))]
pub(super) async fn delete_subscription(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, SubscriptionsError> {
    let id = parse_subscription_id(&id)?;
    app_state.store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
