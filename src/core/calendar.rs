//! Calendar classification rules.
//!
//! Weekend and future classification are pure functions of
//! `(year, month, day, today)`: the reference date is always passed in
//! explicitly so the rules can be tested for arbitrary dates.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn date_of(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next.signed_duration_since(first).num_days() as u32
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Strictly after the reference date.
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Time fields are editable only on non-weekend, non-future days.
pub fn can_edit_hours(date: NaiveDate, today: NaiveDate) -> bool {
    !is_weekend(date) && !is_future(date, today)
}

/// The absence selector stays enabled on future days (pre-booking a
/// non-working day is allowed) but never on weekends.
pub fn can_edit_absence(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Every calendar date from `start` to `end` inclusive, by pure date
/// stepping. No wall-clock or timezone arithmetic is involved, so the
/// enumeration cannot drift across DST or UTC-offset changes.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }
    out
}
