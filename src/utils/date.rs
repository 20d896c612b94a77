use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a "YYYY-MM" period into (year, month).
pub fn parse_period(p: &str) -> AppResult<(i32, u32)> {
    let parsed = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
    Ok((parsed.year(), parsed.month()))
}

/// Resolve a date string, requiring a full YYYY-MM-DD.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
