pub mod break_time;
pub mod config;
pub mod export;
pub mod fetch;
pub mod init;
pub mod log;
pub mod months;
pub mod show;

use crate::errors::AppResult;
use crate::models::YearMonth;

/// Parse an optional `YYYY-MM` argument, defaulting to the current month.
pub(crate) fn resolve_month(month: Option<&str>) -> AppResult<YearMonth> {
    match month {
        Some(m) => m.parse(),
        None => Ok(YearMonth::current()),
    }
}
