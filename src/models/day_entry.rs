use super::absence::Absence;
use chrono::NaiveTime;
use serde::Serialize;

/// One calendar day of a worker's attendance sheet.
///
/// Either the four time fields carry (possibly partial) morning/afternoon
/// segments, or `absence` is set and every time field is empty.
/// `total_minutes` is derived by the validation engine and persisted for
/// convenience; it is recomputed on every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub day: u32, // 1..=days_in_month
    pub morning_in: Option<NaiveTime>,
    pub morning_out: Option<NaiveTime>,
    pub afternoon_in: Option<NaiveTime>,
    pub afternoon_out: Option<NaiveTime>,
    pub absence: Absence,
    pub total_minutes: i64,
    /// Opaque reference to an uploaded justification file.
    /// Only meaningful when `absence == Medical`.
    pub justification: Option<String>,
}

impl DayEntry {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            morning_in: None,
            morning_out: None,
            afternoon_in: None,
            afternoon_out: None,
            absence: Absence::None,
            total_minutes: 0,
            justification: None,
        }
    }

    /// True when at least one time field is set.
    pub fn has_hours(&self) -> bool {
        self.morning_in.is_some()
            || self.morning_out.is_some()
            || self.afternoon_in.is_some()
            || self.afternoon_out.is_some()
    }

    /// True when the day carries neither hours nor an absence.
    pub fn is_blank(&self) -> bool {
        !self.has_hours() && self.absence.is_none()
    }

    pub fn clear_hours(&mut self) {
        self.morning_in = None;
        self.morning_out = None;
        self.afternoon_in = None;
        self.afternoon_out = None;
        self.total_minutes = 0;
    }

    pub fn time_str(t: Option<NaiveTime>) -> String {
        t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
    }
}
