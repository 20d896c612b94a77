use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{calendar, validate};
use crate::db::pool::DbPool;
use crate::db::{log, queries, workers};
use crate::errors::{AppError, AppResult};
use crate::models::absence::Absence;
use crate::models::day_entry::DayEntry;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Absence {
        worker,
        date: date_str,
        kind,
        justification,
    } = cmd
    {
        let d = date::require_date(date_str)?;

        let absence = Absence::from_code(kind)
            .ok_or_else(|| AppError::InvalidAbsence(kind.clone()))?;

        // Weekends never carry an absence override; future days may
        // (pre-booking a non-working day is allowed).
        if !calendar::can_edit_absence(d) {
            return Err(AppError::EditRestricted(format!(
                "{} is a weekend, absences cannot be recorded",
                d
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let w = workers::get_worker(&pool.conn, *worker)?;

        let mut ledger = queries::load_or_blank(&pool.conn, w.id, d.year(), d.month())?;

        // An absence replaces the whole day: hours are dropped, the
        // justification only kept for medical leave.
        let mut entry = DayEntry::empty(d.day());
        entry.absence = absence;
        if absence == Absence::Medical {
            entry.justification = justification.clone();
        }
        ledger.set_day(entry);

        let check = validate::validate_month(&ledger.days);
        if !check.is_clean() {
            return Err(AppError::Validation(check.joined()));
        }

        queries::save_month(&mut pool.conn, &ledger)?;

        log::audit(
            &pool.conn,
            "absence",
            &d.to_string(),
            &format!("worker {} marked {}", w.id, absence.to_db_str()),
        )?;

        if absence.is_none() {
            success(format!("Cleared {} for {}.", d, w.name));
        } else {
            success(format!("Marked {} as {} for {}.", d, absence.label(), w.name));
        }
    }
    Ok(())
}
