use super::Period;

/// Reasons a subscription, filter or identifier is refused before it reaches storage.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("empty service name")]
    EmptyServiceName,
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("invalid user id: {0}")]
    InvalidUserId(#[source] uuid::Error),
    #[error("invalid start period: {0}")]
    InvalidStartPeriod(String),
    #[error("invalid end period: {0}")]
    InvalidEndPeriod(String),
    #[error("invalid end period: {end} precedes start period {start}")]
    EndBeforeStart { start: Period, end: Period },
    #[error("invalid subscription id: {0}")]
    InvalidSubscriptionId(#[source] uuid::Error),
}
