//! Formatting utilities used for ledger tables and exports.

use crate::core::time_math::NO_DATA;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};

const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// `2025年2月28日`
pub fn format_date_ja(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// Single-character weekday, Sunday first.
pub fn weekday_ja(date: NaiveDate) -> &'static str {
    WEEKDAYS_JA[date.weekday().num_days_from_sunday() as usize]
}

/// `H:MM` wall-clock time, or the no-data sentinel.
pub fn format_clock(ts: Option<DateTime<FixedOffset>>) -> String {
    match ts {
        Some(t) => format!("{}:{:02}", t.hour(), t.minute()),
        None => NO_DATA.to_string(),
    }
}
