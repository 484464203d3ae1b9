//! SQLite connection wrapper for the local operation log.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (creating parent dirs if needed) and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = expand_tilde(path);
        if let Some(dir) = p.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let conn = Connection::open(&p)?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database, schema applied.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
