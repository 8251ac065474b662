//! Timestamp converter: Unix epoch values and RFC 3339 dates.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("timestamp out of representable range: {0}")]
    OutOfRange(i64),
    #[error("invalid RFC 3339 date: {0}")]
    BadDate(String),
}

/// Unit of a numeric timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Seconds,
    Millis,
}

/// Both numeric forms of an instant, plus the formatted date.
#[derive(Debug, Clone, Serialize)]
pub struct Instant {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub rfc3339: String,
}

fn from_datetime(dt: DateTime<Utc>) -> Instant {
    Instant {
        unix_seconds: dt.timestamp(),
        unix_millis: dt.timestamp_millis(),
        rfc3339: dt.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Interpret a numeric timestamp in the given unit.
pub fn from_unix(value: i64, unit: Unit) -> Result<Instant, TimestampError> {
    let dt = match unit {
        Unit::Seconds => DateTime::<Utc>::from_timestamp(value, 0),
        Unit::Millis => DateTime::<Utc>::from_timestamp_millis(value),
    };
    dt.map(from_datetime)
        .ok_or(TimestampError::OutOfRange(value))
}

/// Parse an RFC 3339 date into its numeric forms.
pub fn from_rfc3339(input: &str) -> Result<Instant, TimestampError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| from_datetime(dt.with_timezone(&Utc)))
        .map_err(|e| TimestampError::BadDate(e.to_string()))
}
