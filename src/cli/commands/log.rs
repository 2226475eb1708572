use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: true, limit } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let entries = load_log(&mut pool, *limit)?;

        if entries.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("id", 5),
            Column::new("date", 32),
            Column::new("operation", 10),
            Column::new("target", 10),
            Column::new("message", 40),
        ]);
        for e in entries {
            table.add_row(vec![
                e.id.to_string(),
                e.date,
                e.operation,
                e.target,
                e.message,
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
