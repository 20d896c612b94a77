//! Validation engine for day entries.
//!
//! Validation never fails fast: every problem on every day is collected so
//! the caller can surface all messages at once. An incomplete segment
//! (only one endpoint present) is deliberately a non-error contributing
//! zero minutes.

use crate::models::day_entry::DayEntry;
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// The over-8h warning threshold, in minutes.
pub const MAX_DAY_MINUTES: i64 = 480;

#[derive(Debug, Default)]
pub struct DayValidation {
    pub total_minutes: i64,
    pub errors: Vec<String>,
}

impl DayValidation {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

fn segment_minutes(
    label: &str,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    errors: &mut Vec<String>,
) -> i64 {
    match (start, end) {
        (Some(s), Some(e)) => {
            if e < s {
                errors.push(format!("{}: end time precedes start time", label));
                0
            } else {
                (e - s).num_minutes()
            }
        }
        // One endpoint only: incomplete, not invalid.
        _ => 0,
    }
}

/// Check a single day and compute its worked minutes.
///
/// A non-none absence short-circuits: absences carry no hours, so the
/// result is unconditionally `{0, []}`.
pub fn validate_day(entry: &DayEntry) -> DayValidation {
    if !entry.absence.is_none() {
        return DayValidation::default();
    }

    let mut errors = Vec::new();
    let mut total = 0;

    total += segment_minutes("morning", entry.morning_in, entry.morning_out, &mut errors);
    total += segment_minutes(
        "afternoon",
        entry.afternoon_in,
        entry.afternoon_out,
        &mut errors,
    );

    if total > MAX_DAY_MINUTES {
        errors.push(format!(
            "more than 8 hours recorded ({}h {}m)",
            total / 60,
            total % 60
        ));
    }

    DayValidation {
        total_minutes: total,
        errors,
    }
}

#[derive(Debug, Default)]
pub struct MonthValidation {
    /// Errors keyed by day number, in day order.
    pub per_day: BTreeMap<u32, Vec<String>>,
    /// Flat list of "day N: message" lines, ready for display.
    pub messages: Vec<String>,
}

impl MonthValidation {
    pub fn is_clean(&self) -> bool {
        self.per_day.is_empty()
    }

    pub fn joined(&self) -> String {
        self.messages.join("\n")
    }
}

/// Aggregate per-day validation over a full month.
pub fn validate_month(days: &[DayEntry]) -> MonthValidation {
    let mut out = MonthValidation::default();

    for entry in days {
        let result = validate_day(entry);
        if !result.errors.is_empty() {
            for e in &result.errors {
                out.messages.push(format!("day {}: {}", entry.day, e));
            }
            out.per_day.insert(entry.day, result.errors);
        }
    }

    out
}
