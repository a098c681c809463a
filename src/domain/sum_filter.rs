use super::{Period, Subscription, ValidationError};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct SumParameters {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub user_id: Option<String>,
    pub service_name: Option<String>,
}

/// Query interval `[start, end]` with optional equality constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct SumFilter {
    pub start: Period,
    pub end: Period,
    pub user_id: Option<Uuid>,
    pub service: Option<String>,
}

impl SumFilter {
    pub fn new(start: Period, end: Period) -> Self {
        Self {
            start,
            end,
            user_id: None,
            service: None,
        }
    }

    pub fn for_user(self, user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..self
        }
    }

    pub fn for_service(self, service: impl Into<String>) -> Self {
        Self {
            service: Some(service.into()),
            ..self
        }
    }

    pub fn matches(&self, subscription: &Subscription) -> bool {
        self.user_id
            .map_or(true, |user_id| user_id == subscription.user_id)
            && self
                .service
                .as_deref()
                .map_or(true, |service| service == subscription.service.as_ref())
    }
}

impl TryFrom<SumParameters> for SumFilter {
    type Error = ValidationError;

    fn try_from(parameters: SumParameters) -> Result<Self, Self::Error> {
        let user_id = parameters
            .user_id
            .filter(|user_id| !user_id.is_empty())
            .map(|user_id| Uuid::parse_str(&user_id))
            .transpose()
            .map_err(ValidationError::InvalidUserId)?;
        let start = Period::parse(parameters.start_date.as_deref().unwrap_or_default())
            .map_err(ValidationError::InvalidStartPeriod)?;
        let end = match parameters.end_date.as_deref() {
            Some(end) => Period::parse(end).map_err(ValidationError::InvalidEndPeriod)?,
            None => {
                return Err(ValidationError::InvalidEndPeriod(
                    "end period is required".into(),
                ))
            }
        };
        let service = parameters
            .service_name
            .filter(|service| !service.is_empty());

        Ok(Self {
            start,
            end,
            user_id,
            service,
        })
    }
}
