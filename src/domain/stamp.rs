//! Human-readable date keys and timestamps.

use chrono::NaiveDateTime;

/// Format of a group's date key, e.g. `6/10/2024`.
pub const DATE_KEY_FORMAT: &str = "%-m/%-d/%Y";

/// Format of `lastUpdated` values, e.g. `6/10/2024, 9:15:00 AM`.
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Returns the calendar-date key under which notes created at `now` are filed.
pub fn date_key(now: NaiveDateTime) -> String {
    now.format(DATE_KEY_FORMAT).to_string()
}

/// Returns the `lastUpdated` text for a record touched at `now`.
pub fn timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
