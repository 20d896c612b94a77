use serde::Serialize;

pub const DEFAULT_VACATION_DAYS: i64 = 23;

/// A worker registered in the database.
#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    /// Annual vacation allowance, in days.
    pub vacation_days_per_year: i64,
    pub created_at: String, // ISO 8601
}
