use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::DbPool;
use crate::db::log::oplog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite operation log and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.backend.clone(), cli.test)?;

    println!("⚙️  Initializing rAttendance…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Operation log: {}", &cfg.database);
    println!("🌐 Backend     : {}", &cfg.backend_url);

    let pool = DbPool::open(&cfg.database)?;

    if let Err(e) = oplog(
        &pool.conn,
        "init",
        "",
        &format!("Operation log initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write operation log: {e}"));
    }

    success("rAttendance initialization completed!");
    Ok(())
}
