use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A UTC instant as exchanged with the todo API.
///
/// The API emits either RFC 3339 timestamps or naive ISO-8601 date-times
/// without an offset; naive values are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Parses an RFC 3339 or naive ISO-8601 date-time.
    ///
    /// # Errors
    /// Returns the chrono parse error when neither format matches.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(value) {
            Ok(parsed) => Ok(Self(parsed.with_timezone(&Utc))),
            Err(rfc_err) => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Self(naive.and_utc()))
                .map_err(|_| rfc_err),
        }
    }

    /// Formats the instant in the viewer's local time zone.
    #[must_use]
    pub fn to_local_string(&self) -> String {
        self.0
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
