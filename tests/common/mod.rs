//! Shared utilities for integration tests.

pub mod harness;

use chrono::{NaiveDate, NaiveDateTime};

/// A fixed local time for seeding notes, `6/10/2024, 9:00:00 AM`.
#[allow(dead_code)]
pub fn seed_time() -> NaiveDateTime {
    seed_day(10)
}

/// 9 AM on the given day of June 2024.
#[allow(dead_code)]
pub fn seed_day(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, day)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid seed date")
}
