use super::error::SubscriptionsError;
use crate::{
    app_state::AppState,
    domain::{SumFilter, SumParameters},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

#[tracing::instrument(
    name = "Summing subscriptions over a period",
    skip(app_state),
    fields(sum = tracing::field::Empty)
)]
pub(super) async fn sum_subscriptions(
    State(app_state): State<AppState>,
    Query(parameters): Query<SumParameters>,
) -> Result<Json<Sum>, SubscriptionsError> {
    let filter = SumFilter::try_from(parameters)?;
    let sum = app_state.store.sum(&filter).await?;

    tracing::Span::current().record("sum", sum);

    Ok(Json(Sum { sum }))
}

#[derive(Serialize)]
pub(super) struct Sum {
    sum: i64,
}
