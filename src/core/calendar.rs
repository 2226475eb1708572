//! Month expansion and the widened search window.
//!
//! Both work on plain civil dates (`NaiveDate`); day boundaries are never
//! derived from instants here, so no offset can leak into the expansion.

use crate::models::YearMonth;
use chrono::{Datelike, NaiveDate};

/// Day-granular bounds passed to the message search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    /// Search `after:` filter (exclusive): the day before the 1st of the month.
    pub after_date: NaiveDate,
    /// Search `before:` filter (exclusive): the 1st of the following month.
    pub before_date: NaiveDate,
}

impl SearchRange {
    pub fn after_str(&self) -> String {
        self.after_date.format("%Y-%m-%d").to_string()
    }

    pub fn before_str(&self) -> String {
        self.before_date.format("%Y-%m-%d").to_string()
    }
}

/// Last day of the month: day 0 of the following month.
pub fn last_day_of_month(ym: YearMonth) -> NaiveDate {
    let first_of_next = ym.next().first_day();
    first_of_next.pred_opt().unwrap_or(first_of_next)
}

/// Every date of the month, ascending.
pub fn expand_month(ym: YearMonth) -> Vec<NaiveDate> {
    let first = ym.first_day();
    let days = last_day_of_month(ym).day();

    first.iter_days().take(days as usize).collect()
}

/// Search window for a month, widened by a day on each side.
pub fn compute_search_range(ym: YearMonth) -> SearchRange {
    let first = ym.first_day();
    SearchRange {
        after_date: first.pred_opt().unwrap_or(first),
        before_date: ym.next().first_day(),
    }
}
