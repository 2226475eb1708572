//! Ledger snapshots cached per month under `worklog-YYYY-MM`.

use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceLedger, YearMonth};
use tracing::debug;

const PREFIX: &str = "worklog";

pub fn month_key(ym: YearMonth) -> String {
    format!("{PREFIX}-{ym}")
}

pub fn save_monthly_ledger(pool: &mut DbPool, ledger: &AttendanceLedger) -> AppResult<()> {
    let json = serde_json::to_string(ledger)?;
    kv::put(pool, &month_key(ledger.year_month), &json)?;
    debug!(month = %ledger.year_month, "ledger cached");
    Ok(())
}

pub fn load_monthly_ledger(pool: &mut DbPool, ym: YearMonth) -> AppResult<Option<AttendanceLedger>> {
    let Some(json) = kv::get(pool, &month_key(ym))? else {
        return Ok(None);
    };

    let ledger: AttendanceLedger = serde_json::from_str(&json)
        .map_err(|e| AppError::Cache(format!("corrupt snapshot for {ym}: {e}")))?;
    if ledger.year_month != ym {
        return Err(AppError::Cache(format!(
            "snapshot under {} belongs to {}",
            month_key(ym),
            ledger.year_month
        )));
    }
    ledger.validate()?;
    Ok(Some(ledger))
}

/// Cached months, newest first.
pub fn saved_months(pool: &mut DbPool) -> AppResult<Vec<YearMonth>> {
    let prefix = format!("{PREFIX}-");
    let mut months: Vec<YearMonth> = kv::list_keys_with_prefix(pool, &prefix)?
        .iter()
        .filter_map(|k| k.strip_prefix(&prefix))
        .filter_map(|token| token.parse().ok())
        .collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    Ok(months)
}
