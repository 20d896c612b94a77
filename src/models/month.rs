use super::day_entry::DayEntry;
use crate::core::{calendar, validate};
use chrono::NaiveDate;
use serde::Serialize;

/// The full set of day entries plus optional signature for one
/// (worker, year, month).
///
/// Edits replace whole `DayEntry` values at their day slot; aggregates are
/// computed as a pure fold over the ordered vector. The ledger tracks a
/// dirty flag so callers know a save is pending.
#[derive(Debug, Clone)]
pub struct MonthLedger {
    pub worker_id: i64,
    pub year: i32,
    pub month: u32,
    /// One entry per calendar day, ordered, no gaps.
    pub days: Vec<DayEntry>,
    /// Signature image payload, shared by all days of the month.
    pub signature: Option<Vec<u8>>,
    dirty: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub total_minutes: i64,
    pub total_formatted: String, // "H:MM"
    pub days_with_hours: u32,
    pub working_days: u32,
}

impl MonthLedger {
    /// A ledger with one empty entry per calendar day of the month.
    pub fn blank(worker_id: i64, year: i32, month: u32) -> Self {
        let days = (1..=calendar::days_in_month(year, month))
            .map(DayEntry::empty)
            .collect();
        Self {
            worker_id,
            year,
            month,
            days,
            signature: None,
            dirty: false,
        }
    }

    pub fn from_parts(
        worker_id: i64,
        year: i32,
        month: u32,
        days: Vec<DayEntry>,
        signature: Option<Vec<u8>>,
    ) -> Self {
        Self {
            worker_id,
            year,
            month,
            days,
            signature,
            dirty: false,
        }
    }

    pub fn day(&self, day: u32) -> Option<&DayEntry> {
        self.days.get(day as usize - 1)
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        calendar::date_of(self.year, self.month, day)
    }

    /// Replace the entry at its day slot with a recomputed copy.
    ///
    /// `total_minutes` is derived through the validation engine when the
    /// day tracks hours, and forced to zero for absences (which also drop
    /// any time fields). Marks the ledger dirty.
    pub fn set_day(&mut self, mut entry: DayEntry) {
        if entry.absence.is_none() {
            entry.total_minutes = validate::validate_day(&entry).total_minutes;
        } else {
            entry.clear_hours();
        }
        let idx = entry.day as usize - 1;
        if idx < self.days.len() {
            self.days[idx] = entry;
            self.dirty = true;
        }
    }

    pub fn set_signature(&mut self, signature: Option<Vec<u8>>) {
        self.signature = signature;
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// True when the month carries a signature and the given day has
    /// recorded hours.
    pub fn day_has_signature(&self, day: u32) -> bool {
        self.signature.is_some() && self.day(day).map(|d| d.has_hours()).unwrap_or(false)
    }

    /// Aggregate view of the month.
    ///
    /// `working_days` counts non-weekend days that are not in the future,
    /// plus future days that already carry content: a pre-filled future
    /// day stays in the "expected to work" denominator, an empty one does
    /// not.
    pub fn summary(&self, today: NaiveDate) -> MonthSummary {
        let mut total = 0;
        let mut days_with_hours = 0;
        let mut working_days = 0;

        for entry in &self.days {
            total += validate::validate_day(entry).total_minutes;
            if entry.has_hours() {
                days_with_hours += 1;
            }

            if let Some(date) = self.date_of(entry.day) {
                if calendar::is_weekend(date) {
                    continue;
                }
                if !calendar::is_future(date, today) || !entry.is_blank() {
                    working_days += 1;
                }
            }
        }

        MonthSummary {
            total_minutes: total,
            total_formatted: format!("{}:{:02}", total / 60, total % 60),
            days_with_hours,
            working_days,
        }
    }
}
