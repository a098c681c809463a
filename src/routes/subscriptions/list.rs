use super::error::SubscriptionsError;
use crate::{app_state::AppState, domain::Subscription};
use axum::{extract::State, Json};

#[tracing::instrument(
    name = "Listing subscriptions",
    skip(app_state),
    fields(count = tracing::field::Empty)
)]
pub(super) async fn list_subscriptions(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Subscription>>, SubscriptionsError> {
    let subscriptions = app_state.store.list().await?;

    tracing::Span::current().record("count", subscriptions.len());

    Ok(Json(subscriptions))
}
