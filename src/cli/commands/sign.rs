use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate;
use crate::db::pool::DbPool;
use crate::db::{log, queries, workers};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, path};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sign {
        worker,
        period,
        file,
    } = cmd
    {
        let (year, month) = date::parse_period(period)?;

        let image = fs::read(path::expand_tilde(file))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let w = workers::get_worker(&pool.conn, *worker)?;

        let mut ledger = queries::load_or_blank(&pool.conn, w.id, year, month)?;
        ledger.set_signature(Some(image));

        let check = validate::validate_month(&ledger.days);
        if !check.is_clean() {
            return Err(AppError::Validation(check.joined()));
        }

        queries::save_month(&mut pool.conn, &ledger)?;

        log::audit(
            &pool.conn,
            "sign",
            &format!("{}-{:02}", year, month),
            &format!("worker {} sheet signed", w.id),
        )?;

        success(format!("Signature attached to {}-{:02} for {}.", year, month, w.name));
    }
    Ok(())
}
