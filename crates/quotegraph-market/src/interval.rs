//! Data granularity vocabulary shared between the provider client and the
//! chart pipeline.
//!
//! Each interval carries the provider's query mapping and the timestamp
//! format the provider uses for series keys at that granularity.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format for date-only series keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamp format for intraday series keys.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Data granularity of a fetched time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// One bar per week.
    Weekly,
    /// One bar per trading day.
    Daily,
    /// One bar per hour.
    Hourly,
    /// One bar per thirty minutes.
    ThirtyMin,
}

impl Interval {
    /// Provider API function name for this granularity.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Hourly | Self::ThirtyMin => "TIME_SERIES_INTRADAY",
        }
    }

    /// Provider `interval` query parameter, present for intraday requests.
    pub fn query_interval(&self) -> Option<&'static str> {
        match self {
            Self::Weekly | Self::Daily => None,
            Self::Hourly => Some("60min"),
            Self::ThirtyMin => Some("30min"),
        }
    }

    /// JSON key under which the provider nests the series for this granularity.
    pub fn series_key(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly Time Series",
            Self::Daily => "Time Series (Daily)",
            Self::Hourly => "Time Series (60min)",
            Self::ThirtyMin => "Time Series (30min)",
        }
    }

    /// Whether series keys at this granularity include a time of day.
    pub fn is_intraday(&self) -> bool {
        matches!(self, Self::Hourly | Self::ThirtyMin)
    }

    /// Timestamp parse format for series keys at this granularity.
    pub fn timestamp_format(&self) -> &'static str {
        if self.is_intraday() {
            DATETIME_FORMAT
        } else {
            DATE_FORMAT
        }
    }

    /// Parses a series key into a timestamp.
    ///
    /// Returns `None` for keys that do not match the expected format;
    /// provider payloads may carry metadata keys alongside data points.
    pub fn parse_timestamp(&self, key: &str) -> Option<NaiveDateTime> {
        if self.is_intraday() {
            NaiveDateTime::parse_from_str(key, DATETIME_FORMAT).ok()
        } else {
            NaiveDate::parse_from_str(key, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weekly => "weekly",
            Self::Daily => "daily",
            Self::Hourly => "60min",
            Self::ThirtyMin => "30min",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_query_mapping() {
        assert_eq!(Interval::Weekly.function(), "TIME_SERIES_WEEKLY");
        assert_eq!(Interval::Weekly.query_interval(), None);
        assert_eq!(Interval::Hourly.function(), "TIME_SERIES_INTRADAY");
        assert_eq!(Interval::Hourly.query_interval(), Some("60min"));
        assert_eq!(Interval::ThirtyMin.query_interval(), Some("30min"));
    }

    #[test]
    fn test_parse_date_only_key() {
        let ts = Interval::Daily.parse_timestamp("2020-01-15").unwrap();
        assert_eq!(ts.date().year(), 2020);
        assert_eq!(ts.date().day(), 15);
        assert_eq!(ts.time().hour(), 0);
    }

    #[test]
    fn test_parse_intraday_key() {
        let ts = Interval::ThirtyMin
            .parse_timestamp("2020-01-15 14:30:00")
            .unwrap();
        assert_eq!(ts.time().hour(), 14);
        assert_eq!(ts.time().minute(), 30);
    }

    #[test]
    fn test_parse_rejects_mismatched_format() {
        // intraday format against a date-only granularity and vice versa
        assert!(Interval::Daily.parse_timestamp("2020-01-15 14:30:00").is_none());
        assert!(Interval::ThirtyMin.parse_timestamp("2020-01-15").is_none());
        // metadata keys are simply skipped
        assert!(Interval::Daily.parse_timestamp("Meta Data").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::Weekly.to_string(), "weekly");
        assert_eq!(Interval::ThirtyMin.to_string(), "30min");
    }
}
