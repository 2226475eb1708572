use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fetch::fetch_ledger;
use crate::core::session::LedgerSession;
use crate::db::log::ttlog;
use crate::db::monthly::save_monthly_ledger;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::ledger_view::render_ledger;
use crate::ui::messages::{header, info, success};
use std::io::IsTerminal;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fetch { month, no_cache } = cmd {
        let ym = resolve_month(month.as_deref())?;

        let mut session = LedgerSession::new();
        let ticket = session.begin_fetch(ym);

        if cfg.use_mock {
            info(format!("Mock mode: generating sample data for {ym}"));
        } else {
            info(format!("Fetching attendance threads for {ym}…"));
        }

        let ledger = fetch_ledger(cfg, ym).await.map_err(|e| {
            record(cfg, "fetch", &ym.token(), &format!("failed: {e}"));
            e
        })?;

        if !session.complete_fetch(ticket, ledger) {
            return Err(AppError::Other(format!("fetch result for {ym} was superseded")));
        }
        let Some(ledger) = session.ledger() else {
            return Err(AppError::Other("no ledger after fetch".into()));
        };

        header(format!("{ym}"));
        print!("{}", render_ledger(ledger, std::io::stdout().is_terminal()));

        if !*no_cache {
            let mut pool = DbPool::open_initialized(&cfg.database)?;
            save_monthly_ledger(&mut pool, ledger)?;
            ttlog(
                &pool.conn,
                "fetch",
                &ym.token(),
                &format!("{} attended days", ledger.attended_days()),
            )?;
            success(format!("Ledger for {ym} saved to cache"));
        }
    }
    Ok(())
}

/// Best-effort audit line; a missing cache must not hide the fetch error.
fn record(cfg: &Config, operation: &str, target: &str, message: &str) {
    if let Ok(pool) = DbPool::open_initialized(&cfg.database) {
        ttlog(&pool.conn, operation, target, message).ok();
    }
}
