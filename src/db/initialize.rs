use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// A second `worklog` process may hold the cache while it writes a snapshot.
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Prepare a cache connection: wait on a locked file, then bring the schema up to date.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    run_pending_migrations(conn)?;
    Ok(())
}
