use crate::errors::{AppError, AppResult};
use crate::models::vacation::{CountPolicy, VacationRequest, VacationStatus};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<VacationRequest> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = VacationStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid status: {}", status_str))),
        )
    })?;

    Ok(VacationRequest {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        date,
        status,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_request(
    conn: &Connection,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<VacationRequest> {
    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO vacations (worker_id, date, status, created_at)
         VALUES (?1, ?2, 'pending', ?3)",
        params![worker_id, date.format("%Y-%m-%d").to_string(), created_at],
    )?;
    Ok(VacationRequest {
        id: conn.last_insert_rowid(),
        worker_id,
        date,
        status: VacationStatus::Pending,
        created_at,
    })
}

pub fn find_by_worker_and_date(
    conn: &Connection,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<Option<VacationRequest>> {
    let mut stmt = conn.prepare(
        "SELECT id, worker_id, date, status, created_at
         FROM vacations WHERE worker_id = ?1 AND date = ?2",
    )?;
    let req = stmt
        .query_row(
            params![worker_id, date.format("%Y-%m-%d").to_string()],
            map_row,
        )
        .optional()?;
    Ok(req)
}

pub fn get_request(conn: &Connection, id: i64) -> AppResult<VacationRequest> {
    let mut stmt = conn.prepare(
        "SELECT id, worker_id, date, status, created_at
         FROM vacations WHERE id = ?1",
    )?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::RequestNotFound(id))
}

pub fn update_status(conn: &Connection, id: i64, status: VacationStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE vacations SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

pub fn delete_request(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM vacations WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::RequestNotFound(id));
    }
    Ok(())
}

/// Count a worker's requests under the given policy. Rejected requests
/// count under neither.
pub fn count_requests(conn: &Connection, worker_id: i64, policy: CountPolicy) -> AppResult<i64> {
    let sql = match policy {
        CountPolicy::ApprovedOnly => {
            "SELECT COUNT(*) FROM vacations WHERE worker_id = ?1 AND status = 'approved'"
        }
        CountPolicy::PendingAndApproved => {
            "SELECT COUNT(*) FROM vacations
             WHERE worker_id = ?1 AND status IN ('pending','approved')"
        }
    };
    let n: i64 = conn.query_row(sql, [worker_id], |row| row.get(0))?;
    Ok(n)
}

pub fn list_requests(conn: &Connection, worker_id: i64) -> AppResult<Vec<VacationRequest>> {
    let mut stmt = conn.prepare(
        "SELECT id, worker_id, date, status, created_at
         FROM vacations WHERE worker_id = ?1
         ORDER BY date ASC",
    )?;
    let rows = stmt.query_map([worker_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
