use super::model::{DayExport, day_to_row, get_headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write ledger rows as CSV.
pub(crate) fn write_csv(path: &Path, rows: &[DayExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.write_record(day_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
