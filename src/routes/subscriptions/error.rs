use crate::{domain::ValidationError, storage::StorageError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub(super) enum SubscriptionsError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),
    #[error("invalid request: {0}")]
    MalformedBody(#[from] JsonRejection),
    #[error("not found")]
    NotFound(#[source] StorageError),
    #[error("Something went wrong")]
    UnexpectedError(#[source] anyhow::Error),
}

impl From<StorageError> for SubscriptionsError {
    fn from(e: StorageError) -> Self {
        match e {
            e @ StorageError::NotFound(_) => Self::NotFound(e),
            StorageError::UnexpectedError(e) => Self::UnexpectedError(e),
        }
    }
}

impl IntoResponse for SubscriptionsError {
    fn into_response(self) -> Response {
        tracing::error!("{:#?}", self);

        match self {
            Self::InvalidRequest(_) | Self::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
