use crate::core::calendar::expand_month;
use crate::core::time_math::local_at;
use crate::errors::AppResult;
use crate::models::{AttendanceDay, AttendanceLedger, YearMonth};
use chrono::{Datelike, Weekday};

const MOCK_USER_ID: &str = "U01ABC123DE";

/// Synthetic ledger: weekdays 9:00–18:00 local, weekends off.
pub fn create_mock_ledger(ym: YearMonth) -> AppResult<AttendanceLedger> {
    let days = expand_month(ym)
        .into_iter()
        .map(|date| {
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                return AttendanceDay::placeholder(date);
            }
            match (local_at(date, 9, 0), local_at(date, 18, 0)) {
                (Some(clock_in), Some(clock_out)) => AttendanceDay::attended(
                    date,
                    clock_in,
                    clock_out,
                    false,
                    Some(MOCK_USER_ID.to_string()),
                ),
                _ => AttendanceDay::placeholder(date),
            }
        })
        .collect();

    AttendanceLedger::new(ym, days)
}
