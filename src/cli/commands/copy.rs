use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range_copy::{CopyGesture, copy_range};
use crate::core::{vacation::VacationLedger, validate};
use crate::db::pool::DbPool;
use crate::db::{log, queries, workers};
use crate::errors::{AppError, AppResult};
use crate::models::vacation::CountPolicy;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Copy {
        worker,
        source,
        target,
    } = cmd
    {
        let src = date::require_date(source)?;
        let tgt = date::require_date(target)?;

        if (src.year(), src.month()) != (tgt.year(), tgt.month()) {
            return Err(AppError::InvalidPeriod(format!(
                "source and target must be in the same month ({} vs {})",
                source, target
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let w = workers::get_worker(&pool.conn, *worker)?;

        // Quota counter seeded from the pending+approved count at the
        // start of the operation.
        let quota_left = VacationLedger::days_left(&mut pool, &w, CountPolicy::PendingAndApproved)?;

        let mut ledger = queries::load_or_blank(&pool.conn, w.id, src.year(), src.month())?;

        // The two-click gesture: source first, then target.
        let mut gesture = CopyGesture::new();
        gesture.click(src.day());
        let (source_day, target_day) = gesture
            .click(tgt.day())
            .ok_or(AppError::EmptyCopyRange)?;

        let today = date::today();
        let outcome = copy_range(&mut ledger, source_day, target_day, today, quota_left)?;

        if outcome.affected == 0 {
            warning("No eligible days in range");
            return Ok(());
        }

        let check = validate::validate_month(&ledger.days);
        if !check.is_clean() {
            return Err(AppError::Validation(check.joined()));
        }

        queries::save_month(&mut pool.conn, &ledger)?;

        log::audit(
            &pool.conn,
            "copy",
            &format!("{}..{}", src, tgt),
            &format!("worker {} copied day {} to {} day(s)", w.id, source_day, outcome.affected),
        )?;

        if outcome.quota_stopped {
            warning("Vacation quota exhausted, remaining days left untouched");
        }
        success(format!(
            "Copied day {} to {} day(s).",
            source_day, outcome.affected
        ));
    }
    Ok(())
}
