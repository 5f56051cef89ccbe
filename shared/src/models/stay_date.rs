//! Stay date model
//!
//! Check-in/check-out values arrive either as plain calendar dates
//! (`2026-10-24`) or as full instants (`2026-10-24T07:00:00.000Z`, epoch
//! millis). Eligibility rules work on calendar days, so every form can be
//! reduced to a date in the business timezone.

use crate::serde_helpers;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A check-in or check-out value as sent by the booking backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StayDate {
    /// Calendar date without time information
    Date(NaiveDate),
    /// Absolute point in time
    Instant(DateTime<Utc>),
}

impl StayDate {
    /// Calendar date of this value in the given timezone
    pub fn local_date(&self, tz: Tz) -> NaiveDate {
        match self {
            StayDate::Date(date) => *date,
            StayDate::Instant(instant) => instant.with_timezone(&tz).date_naive(),
        }
    }

    /// Parse a string in any of the accepted forms
    ///
    /// Accepted: `YYYY-MM-DD`, RFC 3339, and `YYYY-MM-DDTHH:MM:SS[.fff]`
    /// without offset (treated as a local calendar date).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(StayDate::Date(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(StayDate::Instant(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| StayDate::Date(naive.date()))
    }

    /// Build from Unix epoch milliseconds
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(StayDate::Instant)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(_) => serde_helpers::value_to_i64(value).and_then(Self::from_millis),
            _ => None,
        }
    }
}

impl From<NaiveDate> for StayDate {
    fn from(date: NaiveDate) -> Self {
        StayDate::Date(date)
    }
}

impl From<DateTime<Utc>> for StayDate {
    fn from(instant: DateTime<Utc>) -> Self {
        StayDate::Instant(instant)
    }
}

impl Serialize for StayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            StayDate::Date(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            StayDate::Instant(instant) => serializer.serialize_str(&instant.to_rfc3339()),
        }
    }
}

impl<'de> Deserialize<'de> for StayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        StayDate::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid stay date: {}", value)))
    }
}
