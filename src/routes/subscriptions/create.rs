use super::error::SubscriptionsError;
use crate::{
    app_state::AppState,
    domain::{NewSubscription, SubscriptionData},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

#[tracing::instrument(
    name = "Adding a new subscription",
    skip(app_state, body),
    fields(
        service_name = tracing::field::Empty,
        user_id = tracing::field::Empty,
        sub_id = tracing::field::Empty
    )
)]
pub(super) async fn create_subscription(
    State(app_state): State<AppState>,
    body: Result<Json<SubscriptionData>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedSubscription>), SubscriptionsError> {
    let Json(data) = body?;
    tracing::Span::current()
        .record("service_name", &tracing::field::display(&data.service_name))
        .record("user_id", &tracing::field::display(&data.user_id));

    let subscription = NewSubscription::try_from(data)?;
    let id = app_state.store.create(&subscription).await?;

    tracing::Span::current().record("sub_id", &tracing::field::display(&id));

    Ok((StatusCode::CREATED, Json(CreatedSubscription { id })))
}

#[derive(Serialize)]
pub(super) struct CreatedSubscription {
    #[serde(rename = "sub_id")]
    id: Uuid,
}
