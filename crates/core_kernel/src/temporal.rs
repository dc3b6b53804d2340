//! UTC day bucketing
//!
//! Dated market data is keyed by calendar day. Every timestamp is reduced to
//! the UTC day it falls on, so intra-day timestamps share one bucket.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Date format used by daily data feeds
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
    },

    #[error("Timestamp out of range: {0}ms")]
    OutOfRange(i64),
}

/// Returns the UTC calendar day of a timestamp
pub fn utc_day(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Returns midnight UTC at the start of the given day
pub fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Truncates a timestamp to midnight UTC
pub fn truncate_to_day(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(utc_day(timestamp))
}

/// Parses a `YYYY-MM-DD` day
pub fn parse_day(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT).map_err(|_| TemporalError::InvalidDate {
        value: value.to_string(),
    })
}

/// Returns the UTC day of a timestamp given in epoch milliseconds
pub fn day_from_millis(millis: i64) -> Result<NaiveDate, TemporalError> {
    DateTime::from_timestamp_millis(millis)
        .map(utc_day)
        .ok_or(TemporalError::OutOfRange(millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_intraday_timestamps_share_a_day() {
        let morning = Utc.with_ymd_and_hms(2013, 2, 19, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2013, 2, 19, 23, 59, 59).unwrap();
        assert_eq!(utc_day(morning), utc_day(evening));
    }

    #[test]
    fn test_truncate_to_day() {
        let ts = Utc.with_ymd_and_hms(2013, 2, 19, 15, 30, 0).unwrap();
        assert_eq!(
            truncate_to_day(ts),
            Utc.with_ymd_and_hms(2013, 2, 19, 0, 0, 0).unwrap()
        );
    }
}
