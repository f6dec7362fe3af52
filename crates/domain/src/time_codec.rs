//! Conversions between the timestamp encodings found in notifications and
//! calendar dates.
//!
//! Three encodings show up:
//! - the notification envelope carries an ISO-8601 timestamp (`2016-05-01T12:00:00Z`)
//! - payload fields such as `decloakTime` are absolute Windows file times,
//!   100ns ticks since 1601-01-01
//! - `timeLeft` on citadel notifications is a duration in the same ticks,
//!   counted from the moment the notification is rendered
//!
//! All of them render as `YYYY-MM-DD HH:MM:SS` in UTC. Nothing here reads the
//! wall clock; callers pass "now" in.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::error::TimestampError;

/// 100ns ticks per second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Seconds between 1601-01-01 and 1970-01-01.
pub const WINDOWS_TO_UNIX_EPOCH_SECONDS: i64 = 11_644_473_600;

const NOTIFICATION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A UTC instant at second precision, displayed as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(DateTime<Utc>);

impl CalendarDate {
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

/// Parse the envelope timestamp of a notification.
///
/// # Errors
///
/// Returns `TimestampError::Malformed` unless the input is exactly
/// `YYYY-MM-DDTHH:MM:SSZ`.
pub fn parse_notification_timestamp(timestamp: &str) -> Result<CalendarDate, TimestampError> {
    NaiveDateTime::parse_from_str(timestamp, NOTIFICATION_TIMESTAMP_FORMAT)
        .map(|naive| CalendarDate(naive.and_utc()))
        .map_err(|_| TimestampError::Malformed(timestamp.to_string()))
}

/// Convert an absolute Windows file time (100ns ticks since 1601) to a date.
pub fn epoch_to_date(ticks: i64) -> Result<CalendarDate, TimestampError> {
    let unix_seconds = ticks / TICKS_PER_SECOND - WINDOWS_TO_UNIX_EPOCH_SECONDS;
    DateTime::from_timestamp(unix_seconds, 0)
        .map(CalendarDate)
        .ok_or(TimestampError::OutOfRange(ticks))
}

/// Convert a duration in ticks to the date it ends at, counting from `now`.
pub fn duration_to_future_date(
    ticks: i64,
    now: DateTime<Utc>,
) -> Result<CalendarDate, TimestampError> {
    let seconds = ticks / TICKS_PER_SECOND;
    TimeDelta::try_seconds(seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(CalendarDate)
        .ok_or(TimestampError::OutOfRange(ticks))
}
