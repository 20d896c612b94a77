use crate::errors::{AppError, AppResult};
use crate::models::worker::Worker;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        vacation_days_per_year: row.get("vacation_days_per_year")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_worker(conn: &Connection, name: &str, allowance: i64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO workers (name, vacation_days_per_year, created_at)
         VALUES (?1, ?2, ?3)",
        params![name, allowance, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_worker(conn: &Connection, id: i64) -> AppResult<Worker> {
    let mut stmt = conn.prepare(
        "SELECT id, name, vacation_days_per_year, created_at
         FROM workers WHERE id = ?1",
    )?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::WorkerNotFound(id))
}

pub fn list_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, vacation_days_per_year, created_at
         FROM workers ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Delete a worker. Months, days and vacation requests cascade.
pub fn delete_worker(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM workers WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::WorkerNotFound(id));
    }
    Ok(())
}
