//! Month report assembly.
//!
//! The report is a pure consumer of a finalized month ledger: it reads
//! days, summary and signature, never mutates them.

use crate::models::day_entry::DayEntry;
use crate::models::month::{MonthLedger, MonthSummary};
use crate::models::worker::Worker;
use crate::utils::mins2readable;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub day: u32,
    pub date: String,    // YYYY-MM-DD
    pub weekday: String, // Mon..Sun
    pub morning: String, // "09:00-13:00" or ""
    pub afternoon: String,
    pub absence: String,
    pub total: String, // "H:MM"
    pub signed: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthReport {
    pub worker: String,
    pub year: i32,
    pub month: u32,
    pub rows: Vec<ReportRow>,
    pub summary: MonthSummary,
    pub signed: bool,
}

fn segment_str(start: Option<chrono::NaiveTime>, end: Option<chrono::NaiveTime>) -> String {
    match (start, end) {
        (None, None) => String::new(),
        _ => format!(
            "{}-{}",
            DayEntry::time_str(start),
            DayEntry::time_str(end)
        ),
    }
}

pub fn build_report(ledger: &MonthLedger, worker: &Worker, today: NaiveDate) -> MonthReport {
    let rows = ledger
        .days
        .iter()
        .map(|entry| {
            let date = ledger.date_of(entry.day);
            ReportRow {
                day: entry.day,
                date: date.map(|d| d.to_string()).unwrap_or_default(),
                weekday: date
                    .map(|d| d.weekday().to_string())
                    .unwrap_or_default(),
                morning: segment_str(entry.morning_in, entry.morning_out),
                afternoon: segment_str(entry.afternoon_in, entry.afternoon_out),
                absence: if entry.absence.is_none() {
                    String::new()
                } else {
                    entry.absence.label().to_string()
                },
                total: mins2readable(entry.total_minutes, true),
                signed: ledger.day_has_signature(entry.day),
            }
        })
        .collect();

    MonthReport {
        worker: worker.name.clone(),
        year: ledger.year,
        month: ledger.month,
        rows,
        summary: ledger.summary(today),
        signed: ledger.signature.is_some(),
    }
}

impl MonthReport {
    pub fn title(&self) -> String {
        format!(
            "Attendance sheet - {} - {}-{:02}",
            self.worker, self.year, self.month
        )
    }

    pub fn footer_lines(&self) -> Vec<String> {
        vec![
            format!("Total worked: {}", self.summary.total_formatted),
            format!("Days with hours: {}", self.summary.days_with_hours),
            format!("Working days: {}", self.summary.working_days),
            format!(
                "Signature on file: {}",
                if self.signed { "yes" } else { "no" }
            ),
        ]
    }
}
