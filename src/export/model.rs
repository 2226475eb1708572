// src/export/model.rs

use crate::models::{AttendanceDay, AttendanceLedger};
use crate::utils::weekday_ja;
use serde::Serialize;

/// Flat row of an exported ledger, derived fields included.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub clock_in: String,
    pub clock_out: String,
    pub break_duration: String,
    pub working_duration: String,
    pub has_break_notice: bool,
    pub is_non_attendance: bool,
}

impl From<&AttendanceDay> for DayExport {
    fn from(day: &AttendanceDay) -> Self {
        Self {
            date: day.date_str(),
            weekday: weekday_ja(day.date).to_string(),
            clock_in: day.clock_in_str(),
            clock_out: day.clock_out_str(),
            break_duration: day.break_duration.clone(),
            working_duration: day.working_duration(),
            has_break_notice: day.has_break_notice,
            is_non_attendance: day.is_non_attendance(),
        }
    }
}

/// Header for CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "weekday",
        "clock_in",
        "clock_out",
        "break_duration",
        "working_duration",
        "has_break_notice",
        "is_non_attendance",
    ]
}

pub(crate) fn day_to_row(d: &DayExport) -> Vec<String> {
    vec![
        d.date.clone(),
        d.weekday.clone(),
        d.clock_in.clone(),
        d.clock_out.clone(),
        d.break_duration.clone(),
        d.working_duration.clone(),
        d.has_break_notice.to_string(),
        d.is_non_attendance.to_string(),
    ]
}

pub(crate) fn ledger_rows(ledger: &AttendanceLedger) -> Vec<DayExport> {
    ledger.days.iter().map(DayExport::from).collect()
}
