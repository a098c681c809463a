use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
    Decode, Encode, Postgres, Type,
};
use std::fmt;
use time::{Date, Month};

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 9999;

/// A calendar month, written `MM-YYYY`.
///
/// Stored in Postgres as the first day of the month. Comparisons and overlap
/// arithmetic go through [`Period::month_index`], never through calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period(Date);

impl Period {
    pub fn parse(s: &str) -> Result<Self, String> {
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{2})-([0-9]{4})$").unwrap());

        let invalid = || format!("`{s}` is not a valid `MM-YYYY` period");
        let captures = RE.captures(s).ok_or_else(invalid)?;
        let month = captures[1].parse().map_err(|_| invalid())?;
        let year = captures[2].parse().map_err(|_| invalid())?;

        Self::new(month, year).map_err(|_| invalid())
    }

    pub fn new(month: u8, year: i32) -> Result<Self, String> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(format!(
                "year {year} is outside of the {MIN_YEAR}..={MAX_YEAR} range"
            ));
        }

        let month = Month::try_from(month).map_err(|e| e.to_string())?;
        let date = Date::from_calendar_date(year, month, 1).map_err(|e| e.to_string())?;

        Ok(Self(date))
    }

    /// Absolute month number, `year * 12 + month`.
    pub fn month_index(&self) -> i64 {
        i64::from(self.0.year()) * 12 + i64::from(u8::from(self.0.month()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", u8::from(self.0.month()), self.0.year())
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl Type<Postgres> for Period {
    fn type_info() -> PgTypeInfo {
        Date::type_info()
    }
}

impl<'q> Encode<'q, Postgres> for Period {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <Date as Encode<'q, Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, Postgres> for Period {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let date = Date::decode(value)?;
        Self::new(u8::from(date.month()), date.year()).map_err(|e| e.into())
    }
}
