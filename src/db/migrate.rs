use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the migration
/// journal: applied migrations are recorded as `migration_applied` rows.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the base schema: workers, months, days, vacations.
fn create_base_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            id                     INTEGER PRIMARY KEY AUTOINCREMENT,
            name                   TEXT NOT NULL,
            vacation_days_per_year INTEGER NOT NULL DEFAULT 23,
            created_at             TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS months (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id INTEGER NOT NULL REFERENCES workers(id) ON DELETE CASCADE,
            year      INTEGER NOT NULL,
            month     INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            signature BLOB,
            UNIQUE(worker_id, year, month)
        );

        CREATE TABLE IF NOT EXISTS days (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            month_id      INTEGER NOT NULL REFERENCES months(id) ON DELETE CASCADE,
            day           INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
            morning_in    TEXT,
            morning_out   TEXT,
            afternoon_in  TEXT,
            afternoon_out TEXT,
            absence       TEXT NOT NULL DEFAULT 'none'
                          CHECK(absence IN ('none','vacation','nonworking','medical')),
            total_minutes INTEGER NOT NULL DEFAULT 0,
            UNIQUE(month_id, day)
        );

        CREATE TABLE IF NOT EXISTS vacations (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id  INTEGER NOT NULL REFERENCES workers(id) ON DELETE CASCADE,
            date       TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'pending'
                       CHECK(status IN ('pending','approved','rejected')),
            created_at TEXT NOT NULL,
            UNIQUE(worker_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_days_month ON days(month_id, day);
        CREATE INDEX IF NOT EXISTS idx_vacations_worker ON vacations(worker_id, status);
        "#,
    )?;
    Ok(())
}

/// Add the `justification` column to `days` (medical leave file reference).
fn migrate_add_justification_column(conn: &Connection) -> Result<()> {
    let version = "20240412_0001_add_days_justification";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "days", "justification")? {
        conn.execute("ALTER TABLE days ADD COLUMN justification TEXT;", [])?;
        success("Migration applied: added 'justification' to days table");
    }

    mark_applied(conn, version, "Added justification reference to days")?;
    Ok(())
}

/// Backfill `vacation_days_per_year` for databases created before the
/// per-worker allowance existed.
fn migrate_add_allowance_column(conn: &Connection) -> Result<()> {
    let version = "20240523_0002_add_worker_allowance";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if table_exists(conn, "workers")?
        && !table_has_column(conn, "workers", "vacation_days_per_year")?
    {
        conn.execute(
            "ALTER TABLE workers ADD COLUMN vacation_days_per_year INTEGER NOT NULL DEFAULT 23;",
            [],
        )?;
        success("Migration applied: added 'vacation_days_per_year' to workers table");
    }

    mark_applied(conn, version, "Added per-worker vacation allowance")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_base_schema(conn)?;
    migrate_add_justification_column(conn)?;
    migrate_add_allowance_column(conn)?;
    Ok(())
}
