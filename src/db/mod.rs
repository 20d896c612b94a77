//! SQLite persistence gateway.
//!
//! Month sheets follow a replace-on-save protocol: the caller always
//! resends the full day set, and `save_month` rewrites it inside one
//! transaction.

pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod vacations;
pub mod workers;

pub use migrate::run_pending_migrations;

use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
