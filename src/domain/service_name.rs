use serde::{Deserialize, Serialize};
use sqlx::{
    error::BoxDynError,
    postgres::{PgTypeInfo, PgValueRef},
    Decode, Postgres, Type,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName(String);

impl ServiceName {
    pub fn parse(s: String) -> Result<ServiceName, String> {
        if s.trim().is_empty() {
            Err(format!(
                "Service name is empty or contains whitespace only: `{s}`"
            ))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServiceName {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.0
    }
}

impl Type<Postgres> for ServiceName {
    fn type_info() -> PgTypeInfo {
        String::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ServiceName {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let name = String::decode(value)?;
        Self::parse(name).map_err(|e| e.into())
    }
}
