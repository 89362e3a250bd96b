//! Timestamp capture and formatting
//!
//! Records carry a local time with its UTC offset, truncated to whole
//! microseconds so that the wire form (RFC 3339 with six fractional
//! digits) reconstructs the exact same instant.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Timelike, Utc};

/// Human-readable layout: `Mar 02 10:11:12.345`.
pub const HUMAN_FORMAT: &str = "%b %d %H:%M:%S%.3f";

/// Offset-less layout accepted from older producers, read as UTC.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Current local time with offset, truncated to microseconds.
#[must_use]
pub fn now() -> DateTime<FixedOffset> {
    let now: DateTime<FixedOffset> = Local::now().into();
    truncate_to_micros(now)
}

#[must_use]
pub fn truncate_to_micros(ts: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let nanos = ts.nanosecond();
    ts.with_nanosecond(nanos - nanos % 1_000).unwrap_or(ts)
}

/// RFC 3339 with microseconds and a numeric offset.
#[must_use]
pub fn to_wire(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Micros, false)
}

/// Parse a wire timestamp. Falls back to an offset-less ISO 8601 form,
/// which is interpreted as UTC.
pub fn parse_wire(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(ts) => Ok(ts),
        Err(rfc_err) => match NaiveDateTime::parse_from_str(s, NAIVE_FORMAT) {
            Ok(naive) => Ok(Utc.from_utc_datetime(&naive).into()),
            Err(_) => Err(rfc_err),
        },
    }
}

/// Format for human output. Milliseconds are truncated, not rounded.
#[must_use]
pub fn format_human(ts: &DateTime<FixedOffset>) -> String {
    ts.format(HUMAN_FORMAT).to_string()
}

/// Serde adapter for the wire representation.
pub mod wire {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        ts: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_wire(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_wire(&raw).map_err(serde::de::Error::custom)
    }
}
