use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Ordered schema steps; index + 1 is the resulting `user_version`.
const MIGRATIONS: &[&str] = &[
    // 1: operation log
    r#"
    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
    "#,
    // 2: lookups by operation for `log --print --op`
    r#"
    CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);
    "#,
];

pub fn current_version(conn: &Connection) -> AppResult<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(v as usize)
}

/// Apply every migration newer than the stored `user_version`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let from = current_version(conn)?;
    if from > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "database schema version {from} is newer than this binary ({})",
            MIGRATIONS.len()
        )));
    }

    for (i, sql) in MIGRATIONS.iter().enumerate().skip(from) {
        let version = i + 1;
        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;"
        ))
        .map_err(|e| AppError::Migration(format!("step {version}: {e}")))?;
    }

    Ok(())
}
