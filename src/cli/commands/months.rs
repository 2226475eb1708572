use crate::config::Config;
use crate::db::monthly::saved_months;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open_initialized(&cfg.database)?;
    let months = saved_months(&mut pool)?;

    if months.is_empty() {
        println!("No cached months.");
        return Ok(());
    }
    for ym in months {
        println!("{ym}");
    }
    Ok(())
}
