pub mod classes;
pub mod config;
pub mod init;
pub mod log;
pub mod mark;
pub mod students;
pub mod view;

use crate::api::ApiClient;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::oplog;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub(crate) fn api_client(cfg: &Config) -> AppResult<ApiClient> {
    ApiClient::new(&cfg.backend_url, cfg.request_timeout_secs)
}

/// Open the operation log; a failure is reported but never aborts a command.
pub(crate) fn open_log(cfg: &Config) -> Option<DbPool> {
    match DbPool::open(&cfg.database) {
        Ok(pool) => Some(pool),
        Err(e) => {
            warning(format!("Operation log unavailable ({}): {e}", cfg.database));
            None
        }
    }
}

/// Write one operation log row (non blocking).
pub(crate) fn record(pool: Option<&DbPool>, operation: &str, target: &str, message: &str) {
    if let Some(pool) = pool
        && let Err(e) = oplog(&pool.conn, operation, target, message)
    {
        warning(format!("Failed to write operation log: {e}"));
    }
}
