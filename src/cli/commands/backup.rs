use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
        && let Some(dest) = backup::run(cfg, file, *compress, *force)?
    {
        // Non-blocking audit entry
        if let Ok(conn) = Connection::open(&cfg.database) {
            let _ = log::audit(
                &conn,
                "backup",
                &dest.to_string_lossy(),
                if *compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }
    }
    Ok(())
}
