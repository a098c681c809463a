use super::{Period, Price, ServiceName, ValidationError};
use serde::Deserialize;
use uuid::Uuid;

/// Subscription fields as they arrive over the wire, before validation.
///
/// Absent fields fall back to empty values so that they are reported by
/// [`NewSubscription::try_from`] with a specific reason.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubscriptionData {
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSubscription {
    pub service: ServiceName,
    pub price: Price,
    pub user_id: Uuid,
    pub start: Period,
    pub end: Option<Period>,
}

impl TryFrom<SubscriptionData> for NewSubscription {
    type Error = ValidationError;

    fn try_from(data: SubscriptionData) -> Result<Self, Self::Error> {
        let service =
            ServiceName::parse(data.service_name).map_err(|_| ValidationError::EmptyServiceName)?;
        let price = Price::parse(data.price).map_err(ValidationError::InvalidPrice)?;
        let user_id = Uuid::parse_str(&data.user_id).map_err(ValidationError::InvalidUserId)?;
        let start = Period::parse(&data.start_date).map_err(ValidationError::InvalidStartPeriod)?;
        let end = data
            .end_date
            .as_deref()
            .map(Period::parse)
            .transpose()
            .map_err(ValidationError::InvalidEndPeriod)?;

        match end {
            Some(end) if end < start => Err(ValidationError::EndBeforeStart { start, end }),
            _ => Ok(Self {
                service,
                price,
                user_id,
                start,
                end,
            }),
        }
    }
}
