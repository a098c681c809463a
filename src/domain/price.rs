use serde::{Deserialize, Serialize};
use sqlx::{
    error::BoxDynError,
    postgres::{PgTypeInfo, PgValueRef},
    Decode, Postgres, Type,
};

/// Monthly cost in minor currency units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i32);

impl Price {
    pub fn parse(value: i64) -> Result<Price, String> {
        match i32::try_from(value) {
            Ok(price) if price >= 0 => Ok(Self(price)),
            _ => Err(format!(
                "`{value}` is not a price in the 0..={} range",
                i32::MAX
            )),
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        i64::from(price.0)
    }
}

impl Type<Postgres> for Price {
    fn type_info() -> PgTypeInfo {
        i32::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Price {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let price = i32::decode(value)?;
        Self::parse(price.into()).map_err(|e| e.into())
    }
}
