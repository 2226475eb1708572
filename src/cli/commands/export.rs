use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::monthly::load_monthly_ledger;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::YearMonth;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        file,
        force,
    } = cmd
    {
        let ym: YearMonth = month.parse()?;
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let ledger = load_monthly_ledger(&mut pool, ym)?.ok_or_else(|| {
            AppError::Export(format!("no cached ledger for {ym}; run `worklog fetch {ym}`"))
        })?;
        ExportLogic::export(&ledger, *format, file, *force)?;
    }
    Ok(())
}
