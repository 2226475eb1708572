use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::monthly::load_monthly_ledger;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::ledger_view::render_ledger;
use crate::ui::messages::{header, warning};
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month } = cmd {
        let ym = resolve_month(month.as_deref())?;
        let mut pool = DbPool::open_initialized(&cfg.database)?;

        match load_monthly_ledger(&mut pool, ym)? {
            Some(ledger) => {
                header(format!("{ym}"));
                print!("{}", render_ledger(&ledger, std::io::stdout().is_terminal()));
            }
            None => warning(format!(
                "No cached ledger for {ym}. Run `worklog fetch {ym}` first."
            )),
        }
    }
    Ok(())
}
