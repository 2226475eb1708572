//! Key-value store on top of the `kv_store` table.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub fn put(pool: &mut DbPool, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    pool.conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

pub fn get(pool: &mut DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

pub fn list_keys_with_prefix(pool: &mut DbPool, prefix: &str) -> AppResult<Vec<String>> {
    let keys = pool.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>();
        keys
    })?;
    Ok(keys.into_iter().filter(|k| k.starts_with(prefix)).collect())
}
