use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{calendar, validate};
use crate::db::pool::DbPool;
use crate::db::{log, queries, workers};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, mins2readable, time};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        worker,
        date: date_str,
        morning_in,
        morning_out,
        afternoon_in,
        afternoon_out,
    } = cmd
    {
        let d = date::require_date(date_str)?;
        let today = date::today();

        if !calendar::can_edit_hours(d, today) {
            let reason = if calendar::is_weekend(d) {
                "weekend"
            } else {
                "future day"
            };
            return Err(AppError::EditRestricted(format!(
                "{} is a {}, hours cannot be recorded",
                d, reason
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let w = workers::get_worker(&pool.conn, *worker)?;

        let mut ledger = queries::load_or_blank(&pool.conn, w.id, d.year(), d.month())?;

        let mut entry = ledger
            .day(d.day())
            .cloned()
            .ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        if !entry.absence.is_none() {
            return Err(AppError::EditRestricted(format!(
                "{} is marked '{}'; clear the absence first",
                d,
                entry.absence.label()
            )));
        }

        // Only the provided fields are replaced.
        if let Some(t) = time::parse_optional_time(morning_in.as_ref())? {
            entry.morning_in = Some(t);
        }
        if let Some(t) = time::parse_optional_time(morning_out.as_ref())? {
            entry.morning_out = Some(t);
        }
        if let Some(t) = time::parse_optional_time(afternoon_in.as_ref())? {
            entry.afternoon_in = Some(t);
        }
        if let Some(t) = time::parse_optional_time(afternoon_out.as_ref())? {
            entry.afternoon_out = Some(t);
        }

        ledger.set_day(entry);

        // The whole month is revalidated and the save refused on any
        // error, every message surfaced at once.
        let check = validate::validate_month(&ledger.days);
        if !check.is_clean() {
            return Err(AppError::Validation(check.joined()));
        }

        queries::save_month(&mut pool.conn, &ledger)?;

        let total = ledger.day(d.day()).map(|e| e.total_minutes).unwrap_or(0);
        log::audit(
            &pool.conn,
            "set",
            &d.to_string(),
            &format!("worker {} recorded {}", w.id, mins2readable(total, true)),
        )?;

        success(format!(
            "Recorded {} for {} on {}.",
            mins2readable(total, false),
            w.name,
            d
        ));
    }
    Ok(())
}
