use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::validate;
use crate::db::pool::DbPool;
use crate::db::{queries, workers};
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        worker,
        period,
        format,
        file,
        force,
    } = cmd
    {
        let (year, month) = date::parse_period(period)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let w = workers::get_worker(&pool.conn, *worker)?;

        let ledger = queries::load_or_blank(&pool.conn, w.id, year, month)?;

        // A month failing validation is never exported.
        let check = validate::validate_month(&ledger.days);
        if !check.is_clean() {
            return Err(AppError::Validation(check.joined()));
        }

        let report = export::build_report(&ledger, &w, date::today());
        export::write_report(&report, format, file, *force)?;
    }
    Ok(())
}
