use std::{fmt, time::Duration};

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Point in time (UTC) as reported by the remote table store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Invalid timestamp: {0}")]
pub struct TimestampParseError(String);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn from_seconds(seconds: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp(seconds).ok().map(Self)
    }

    pub fn as_seconds(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        OffsetDateTime::parse(s, &Rfc3339)
            .map(Self)
            .map_err(|_| TimestampParseError(s.to_owned()))
    }

    pub fn format_rfc3339(self) -> String {
        // RFC 3339 formatting only fails for years beyond 9999
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.0.unix_timestamp().to_string())
    }

    /// Calendar date in ISO format, e.g. `2024-03-01`.
    pub fn date(self) -> String {
        self.0.date().to_string()
    }

    /// Checks if `self` lies less than `window` before `now`.
    pub fn is_within(self, window: Duration, now: Timestamp) -> bool {
        let age = now.0 - self.0;
        age < window
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.format_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_store_timestamps() {
        let t = Timestamp::parse_rfc3339("2024-10-01T12:30:00.123456+00:00").unwrap();
        assert_eq!(t.date(), "2024-10-01");
        let t = Timestamp::parse_rfc3339("2024-10-01T12:30:00Z").unwrap();
        assert_eq!(t.as_seconds(), 1_727_785_800);
        assert!(Timestamp::parse_rfc3339("yesterday").is_err());
    }

    #[test]
    fn within_time_window() {
        let now = Timestamp::from_seconds(1_000_000).unwrap();
        let day = Duration::from_secs(24 * 60 * 60);
        let an_hour_ago = Timestamp::from_seconds(1_000_000 - 3_600).unwrap();
        let two_days_ago = Timestamp::from_seconds(1_000_000 - 2 * 86_400).unwrap();
        assert!(an_hour_ago.is_within(day, now));
        assert!(!two_days_ago.is_within(day, now));
        assert!(now.is_within(day, now));
    }
}
