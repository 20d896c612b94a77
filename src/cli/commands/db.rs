use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                return Err(AppError::Migration(format!(
                    "Integrity check failed: {}",
                    result
                )));
            }
        }

        if *show_info {
            let count = |sql: &str| -> AppResult<i64> {
                Ok(pool.conn.query_row(sql, [], |row| row.get(0))?)
            };

            info(format!("Database: {}", cfg.database));
            println!("Workers:           {}", count("SELECT COUNT(*) FROM workers")?);
            println!("Month sheets:      {}", count("SELECT COUNT(*) FROM months")?);
            println!("Day rows:          {}", count("SELECT COUNT(*) FROM days")?);
            println!("Vacation requests: {}", count("SELECT COUNT(*) FROM vacations")?);
        }
    }
    Ok(())
}
