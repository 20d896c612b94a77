use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{queries, vacations, workers};
use crate::errors::AppResult;
use crate::models::absence::Absence;
use crate::models::day_entry::DayEntry;
use crate::models::vacation::VacationStatus;
use crate::ui::messages::header;
use crate::utils::{date, mins2readable};
use chrono::Datelike;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { worker, period } = cmd {
        let (year, month) = match period {
            Some(p) => date::parse_period(p)?,
            None => {
                let t = date::today();
                (t.year(), t.month())
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let w = workers::get_worker(&pool.conn, *worker)?;
        let ledger = queries::load_or_blank(&pool.conn, w.id, year, month)?;

        // Pending requests are rendered distinctly from approved ones.
        let statuses: HashMap<u32, VacationStatus> = vacations::list_requests(&pool.conn, w.id)?
            .into_iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .map(|r| (r.date.day(), r.status))
            .collect();

        header(format!("{} {}-{:02}", w.name, year, month));
        println!(
            "{:>3} {:<4} {:<12} {:<12} {:<16} {:>6}",
            "Day", "Wd", "Morning", "Afternoon", "Absence", "Total"
        );

        let today = date::today();
        for entry in &ledger.days {
            let d = ledger.date_of(entry.day);
            let wd = d.map(|d| d.weekday().to_string()).unwrap_or_default();

            let absence = match entry.absence {
                Absence::Vacation => match statuses.get(&entry.day) {
                    Some(VacationStatus::Pending) => "Vacation (pending)".to_string(),
                    _ => "Vacation".to_string(),
                },
                a if a.is_none() => String::new(),
                a => a.label().to_string(),
            };

            println!(
                "{:>3} {:<4} {:<12} {:<12} {:<16} {:>6}",
                entry.day,
                wd,
                segment(entry.morning_in, entry.morning_out),
                segment(entry.afternoon_in, entry.afternoon_out),
                absence,
                if entry.total_minutes > 0 {
                    mins2readable(entry.total_minutes, true)
                } else {
                    String::new()
                },
            );
        }

        let s = ledger.summary(today);
        println!();
        println!(
            "Total: {}  |  Days with hours: {}  |  Working days: {}  |  Signed: {}",
            s.total_formatted,
            s.days_with_hours,
            s.working_days,
            if ledger.signature.is_some() { "yes" } else { "no" }
        );
    }
    Ok(())
}

fn segment(start: Option<chrono::NaiveTime>, end: Option<chrono::NaiveTime>) -> String {
    match (start, end) {
        (None, None) => String::new(),
        _ => format!("{}-{}", DayEntry::time_str(start), DayEntry::time_str(end)),
    }
}
