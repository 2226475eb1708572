use crate::core::time_math::{self, DEFAULT_BREAK, NO_DATA};
use crate::errors::{AppError, AppResult};
use crate::models::year_month::YearMonth;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar date of the ledger.
///
/// The working duration is not a field: it is always derived from
/// clock-in, clock-out and break duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub clock_in: Option<DateTime<FixedOffset>>,
    pub clock_out: Option<DateTime<FixedOffset>>,
    pub break_duration: String,
    #[serde(default)]
    pub has_break_notice: bool,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AttendanceDay {
    pub fn attended(
        date: NaiveDate,
        clock_in: DateTime<FixedOffset>,
        clock_out: DateTime<FixedOffset>,
        has_break_notice: bool,
        user_id: Option<String>,
    ) -> Self {
        Self {
            date,
            clock_in: Some(clock_in),
            clock_out: Some(clock_out),
            break_duration: DEFAULT_BREAK.to_string(),
            has_break_notice,
            user_id,
        }
    }

    /// Gap filler for a date without any attendance thread.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in: None,
            clock_out: None,
            break_duration: NO_DATA.to_string(),
            has_break_notice: false,
            user_id: None,
        }
    }

    pub fn is_non_attendance(&self) -> bool {
        self.clock_in.is_none() && self.clock_out.is_none()
    }

    pub fn working_duration(&self) -> String {
        time_math::compute_working_duration(self.clock_in, self.clock_out, &self.break_duration)
    }

    /// `YYYY-MM-DD`
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        time_math::render_optional(self.clock_in)
    }

    pub fn clock_out_str(&self) -> String {
        time_math::render_optional(self.clock_out)
    }
}

/// Every date of one month, ascending, without gaps or duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLedger {
    pub year_month: YearMonth,
    pub days: Vec<AttendanceDay>,
}

impl AttendanceLedger {
    /// Build a ledger, rejecting day lists that break the date-complete invariant.
    pub fn new(year_month: YearMonth, days: Vec<AttendanceDay>) -> AppResult<Self> {
        let ledger = Self { year_month, days };
        ledger.validate()?;
        Ok(ledger)
    }

    pub fn validate(&self) -> AppResult<()> {
        let expected = crate::core::calendar::expand_month(self.year_month);
        if expected.len() != self.days.len() {
            return Err(AppError::Cache(format!(
                "ledger for {} has {} days, expected {}",
                self.year_month,
                self.days.len(),
                expected.len()
            )));
        }
        for (day, date) in self.days.iter().zip(expected) {
            if day.date != date {
                return Err(AppError::Cache(format!(
                    "ledger for {} is out of order at {}",
                    self.year_month, day.date
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, index: usize) -> AppResult<&AttendanceDay> {
        self.days.get(index).ok_or(AppError::InvalidDayIndex(index))
    }

    pub fn day_mut(&mut self, index: usize) -> AppResult<&mut AttendanceDay> {
        self.days
            .get_mut(index)
            .ok_or(AppError::InvalidDayIndex(index))
    }

    pub fn attended_days(&self) -> usize {
        self.days.iter().filter(|d| !d.is_non_attendance()).count()
    }

    /// Sum of every well-formed working duration, in minutes.
    pub fn total_working_minutes(&self) -> i64 {
        self.days
            .iter()
            .filter_map(|d| time_math::parse_duration_text(&d.working_duration()))
            .sum()
    }
}
