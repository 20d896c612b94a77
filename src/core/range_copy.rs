//! Range-copy: propagate one day's content across a contiguous day span.
//!
//! The exclusion rules (weekend, future, vacation quota) are applied
//! declaratively per candidate day rather than by pre-filtering the
//! range, so each skip decision stays auditable day by day.

use crate::core::{calendar, validate};
use crate::errors::{AppError, AppResult};
use crate::models::absence::Absence;
use crate::models::day_entry::DayEntry;
use crate::models::month::MonthLedger;
use chrono::NaiveDate;

/// The two-click copy gesture: first click selects the source day,
/// second click picks the target and yields the pair to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyGesture {
    #[default]
    Idle,
    SourceSelected {
        source: u32,
    },
}

impl CopyGesture {
    pub fn new() -> Self {
        CopyGesture::Idle
    }

    /// Register a click on a day. Returns `Some((source, target))` when
    /// the gesture completes, resetting the machine.
    pub fn click(&mut self, day: u32) -> Option<(u32, u32)> {
        match *self {
            CopyGesture::Idle => {
                *self = CopyGesture::SourceSelected { source: day };
                None
            }
            CopyGesture::SourceSelected { source } => {
                *self = CopyGesture::Idle;
                Some((source, day))
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = CopyGesture::Idle;
    }
}

#[derive(Debug, Default)]
pub struct CopyOutcome {
    /// Days actually overwritten.
    pub affected: u32,
    /// Candidate days skipped because the vacation quota ran out.
    pub quota_stopped: bool,
}

/// Apply the source day's content to every day strictly between source and
/// target (source excluded, target included), in day order.
///
/// `vacation_quota_left` seeds the running counter for vacation sources:
/// allowance minus the worker's pending+approved request count at the
/// start of the operation. Days already marked vacation are rewritten
/// without consuming a unit; once the counter hits zero the remaining
/// candidates are silently left untouched.
pub fn copy_range(
    ledger: &mut MonthLedger,
    source_day: u32,
    target_day: u32,
    today: NaiveDate,
    vacation_quota_left: i64,
) -> AppResult<CopyOutcome> {
    let last = ledger.days.len() as u32;
    if source_day < 1 || source_day > last || target_day < 1 || target_day > last {
        return Err(AppError::InvalidDate(format!(
            "day out of range for {}-{:02}",
            ledger.year, ledger.month
        )));
    }
    if source_day == target_day {
        return Err(AppError::EmptyCopyRange);
    }

    let source = ledger
        .day(source_day)
        .cloned()
        .ok_or(AppError::EmptyCopyRange)?;

    // The source must carry something worth propagating: valid hours or a
    // non-none absence.
    if source.absence.is_none() {
        let check = validate::validate_day(&source);
        if !source.has_hours() || !check.is_clean() {
            return Err(AppError::EditRestricted(format!(
                "day {} has no valid content to copy",
                source_day
            )));
        }
    }

    let from = source_day.min(target_day) + 1;
    let to = source_day.max(target_day);

    let mut outcome = CopyOutcome::default();
    let mut quota = vacation_quota_left;

    for day in from..=to {
        if day == source_day {
            continue;
        }
        let date = match ledger.date_of(day) {
            Some(d) => d,
            None => continue,
        };

        // Weekends are never overwritten.
        if calendar::is_weekend(date) {
            continue;
        }

        if source.absence.is_none() {
            // Hours are never pasted into the future.
            if calendar::is_future(date, today) {
                continue;
            }
            let mut entry = DayEntry::empty(day);
            entry.morning_in = source.morning_in;
            entry.morning_out = source.morning_out;
            entry.afternoon_in = source.afternoon_in;
            entry.afternoon_out = source.afternoon_out;
            ledger.set_day(entry);
            outcome.affected += 1;
            continue;
        }

        if source.absence == Absence::Vacation {
            let already_vacation = ledger
                .day(day)
                .map(|d| d.absence == Absence::Vacation)
                .unwrap_or(false);

            if !already_vacation {
                if quota <= 0 {
                    outcome.quota_stopped = true;
                    break;
                }
                quota -= 1;
            }

            let mut entry = DayEntry::empty(day);
            entry.absence = Absence::Vacation;
            ledger.set_day(entry);
            outcome.affected += 1;
            continue;
        }

        // Other absence kinds: overwrite unconditionally. Justification
        // files are never copied.
        let mut entry = DayEntry::empty(day);
        entry.absence = source.absence;
        ledger.set_day(entry);
        outcome.affected += 1;
    }

    Ok(outcome)
}
