//! Month sheet load/save.
//!
//! `save_month` implements the replace protocol: inside one transaction
//! the prior day rows are deleted, the signature rewritten and the full
//! new day set inserted. Day row identity is not preserved across saves;
//! the caller always resends the whole month.

use crate::errors::{AppError, AppResult};
use crate::models::absence::Absence;
use crate::models::day_entry::DayEntry;
use crate::models::month::MonthLedger;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn parse_opt_time(raw: Option<String>) -> rusqlite::Result<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M").map(Some).map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s)),
            )
        }),
    }
}

fn map_day_row(row: &Row) -> rusqlite::Result<DayEntry> {
    let absence_str: String = row.get("absence")?;
    let absence = Absence::from_db_str(&absence_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAbsence(absence_str.clone())),
        )
    })?;

    Ok(DayEntry {
        day: row.get("day")?,
        morning_in: parse_opt_time(row.get("morning_in")?)?,
        morning_out: parse_opt_time(row.get("morning_out")?)?,
        afternoon_in: parse_opt_time(row.get("afternoon_in")?)?,
        afternoon_out: parse_opt_time(row.get("afternoon_out")?)?,
        absence,
        total_minutes: row.get("total_minutes")?,
        justification: row.get("justification")?,
    })
}

fn find_month_id(
    conn: &Connection,
    worker_id: i64,
    year: i32,
    month: u32,
) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare(
        "SELECT id FROM months WHERE worker_id = ?1 AND year = ?2 AND month = ?3",
    )?;
    let id = stmt
        .query_row(params![worker_id, year, month], |row| row.get(0))
        .optional()?;
    Ok(id)
}

/// Load the sheet for (worker, year, month). A month never saved is not
/// an error: the result is simply `None`.
pub fn load_month(
    conn: &Connection,
    worker_id: i64,
    year: i32,
    month: u32,
) -> AppResult<Option<MonthLedger>> {
    let month_id = match find_month_id(conn, worker_id, year, month)? {
        Some(id) => id,
        None => return Ok(None),
    };

    let signature: Option<Vec<u8>> = conn.query_row(
        "SELECT signature FROM months WHERE id = ?1",
        [month_id],
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(
        "SELECT day, morning_in, morning_out, afternoon_in, afternoon_out,
                absence, total_minutes, justification
         FROM days
         WHERE month_id = ?1
         ORDER BY day ASC",
    )?;
    let rows = stmt.query_map([month_id], map_day_row)?;

    let mut days = Vec::new();
    for r in rows {
        days.push(r?);
    }

    Ok(Some(MonthLedger::from_parts(
        worker_id, year, month, days, signature,
    )))
}

/// Load an existing sheet or start a blank one covering every calendar day.
pub fn load_or_blank(
    conn: &Connection,
    worker_id: i64,
    year: i32,
    month: u32,
) -> AppResult<MonthLedger> {
    Ok(load_month(conn, worker_id, year, month)?
        .unwrap_or_else(|| MonthLedger::blank(worker_id, year, month)))
}

fn time_param(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

/// Replace the whole month atomically: delete prior day rows and
/// signature, then insert the new set. All-or-nothing; a concurrent
/// reader never observes a half-replaced day set.
pub fn save_month(conn: &mut Connection, ledger: &MonthLedger) -> AppResult<()> {
    let tx = conn.transaction()?;

    let month_id = match find_month_id(&tx, ledger.worker_id, ledger.year, ledger.month)? {
        Some(id) => {
            tx.execute("DELETE FROM days WHERE month_id = ?1", [id])?;
            tx.execute(
                "UPDATE months SET signature = ?1 WHERE id = ?2",
                params![ledger.signature, id],
            )?;
            id
        }
        None => {
            tx.execute(
                "INSERT INTO months (worker_id, year, month, signature)
                 VALUES (?1, ?2, ?3, ?4)",
                params![ledger.worker_id, ledger.year, ledger.month, ledger.signature],
            )?;
            tx.last_insert_rowid()
        }
    };

    {
        let mut stmt = tx.prepare(
            "INSERT INTO days (month_id, day, morning_in, morning_out,
                               afternoon_in, afternoon_out, absence,
                               total_minutes, justification)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;

        for entry in &ledger.days {
            stmt.execute(params![
                month_id,
                entry.day,
                time_param(entry.morning_in),
                time_param(entry.morning_out),
                time_param(entry.afternoon_in),
                time_param(entry.afternoon_out),
                entry.absence.to_db_str(),
                entry.total_minutes,
                entry.justification,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}
