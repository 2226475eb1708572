use super::fs_utils::{ensure_parent_dir, ensure_writable, resolve_output_path};
use super::model::ledger_rows;
use super::{ExportFormat, csv, json};
use crate::errors::AppResult;
use crate::models::AttendanceLedger;
use crate::ui::messages::success;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one month's ledger.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export(
        ledger: &AttendanceLedger,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_output_path(file)?;
        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;

        let rows = ledger_rows(ledger);
        match format {
            ExportFormat::Csv => csv::write_csv(&path, &rows)?,
            ExportFormat::Json => json::write_json(&path, &rows)?,
        }

        info!(month = %ledger.year_month, format = format.as_str(), path = %path.display(), "ledger exported");
        success(format!(
            "{format} export of {} completed: {} ({} days)",
            ledger.year_month,
            path.display(),
            rows.len()
        ));
        Ok(())
    }
}
