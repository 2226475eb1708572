use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::LedgerSession;
use crate::db::log::ttlog;
use crate::db::monthly::{load_monthly_ledger, save_monthly_ledger};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use crate::ui::messages::{success, warning};

/// Edit + commit a break value, as the table field would on typing and blur.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break { month, day, value } = cmd {
        let ym: YearMonth = month.parse()?;
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        let ledger = load_monthly_ledger(&mut pool, ym)?.ok_or_else(|| {
            AppError::Cache(format!("no cached ledger for {ym}; run `worklog fetch {ym}`"))
        })?;
        let index = day
            .checked_sub(1)
            .filter(|i| *i < ledger.len())
            .ok_or(AppError::InvalidDayIndex(*day))?;

        let mut session = LedgerSession::with_ledger(ledger);
        session.on_break_time_edit(index, value)?;
        if let Some(notice) = session.on_break_time_commit(index)? {
            warning(&notice.message);
            session.dismiss_notice(index);
        }

        let Some(ledger) = session.ledger() else {
            return Err(AppError::Other("ledger missing after edit".into()));
        };
        let edited = ledger.day(index)?;
        save_monthly_ledger(&mut pool, ledger)?;
        ttlog(
            &pool.conn,
            "break",
            &edited.date_str(),
            &format!("break set to {}", edited.break_duration),
        )?;

        success(format!(
            "{}: break {} → working {}",
            edited.date_str(),
            edited.break_duration,
            edited.working_duration()
        ));
    }
    Ok(())
}
