//! Lenient timestamp decoding.
//!
//! The catalog API is not consistent about dates: depending on the backend
//! they arrive as RFC 3339 strings, naive `YYYY-MM-DD HH:MM:SS` strings,
//! epoch milliseconds, or a structured `{ "seconds": .., "nanos": .. }`
//! object. All of them normalise to a UTC [`Timestamp`]. A value that fits
//! none of these shapes decodes to `None` and never fails the record.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A point in time normalised to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap a UTC datetime.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Parse any of the accepted string forms.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(at.with_timezone(&Utc)));
        }

        const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
        for format in NAIVE_FORMATS {
            if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self(Utc.from_utc_datetime(&at)));
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|at| Self(Utc.from_utc_datetime(&at)))
    }

    /// Build from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    /// Build from epoch seconds plus nanoseconds.
    pub fn from_parts(seconds: i64, nanos: u32) -> Option<Self> {
        DateTime::from_timestamp(seconds, nanos).map(Self)
    }

    /// Get the underlying UTC datetime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Format as RFC 3339.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Every shape a timestamp has been seen in on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    Fractional(f64),
    Structured {
        #[serde(alias = "secs", alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "nanoseconds", alias = "_nanoseconds")]
        nanos: u32,
    },
    Other(serde_json::Value),
}

impl RawTimestamp {
    fn normalize(self) -> Option<Timestamp> {
        match self {
            RawTimestamp::Text(raw) => Timestamp::parse(&raw),
            RawTimestamp::Millis(millis) => Timestamp::from_millis(millis),
            RawTimestamp::Fractional(millis) if millis.is_finite() => {
                Timestamp::from_millis(millis.round() as i64)
            }
            RawTimestamp::Fractional(_) => None,
            RawTimestamp::Structured { seconds, nanos } => Timestamp::from_parts(seconds, nanos),
            RawTimestamp::Other(_) => None,
        }
    }
}

/// Deserialize an optional timestamp, mapping unrecognised shapes to `None`.
///
/// Use with `#[serde(default, deserialize_with = "timestamp::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(raw.and_then(RawTimestamp::normalize))
}
