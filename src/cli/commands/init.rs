use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Create the config directory and file, the SQLite database and run
/// all pending migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    info("Initializing presenza");
    println!("Config file: {}", Config::config_file().display());
    println!("Database:    {}", db_str);

    let conn = Connection::open(&db_path)?;
    crate::db::init_db(&conn)?;

    success(format!("Database initialized at {}", db_str));

    // Non-blocking internal audit entry
    if let Err(e) = log::audit(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", db_str),
    ) {
        eprintln!("Failed to write internal log: {}", e);
    }

    Ok(())
}
