//! Internal audit log rendering.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;

struct LogEntry {
    id: i32,
    date: String,
    operation: String,
    target: String,
    message: String,
}

impl LogEntry {
    fn op_target(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "set" | "absence" => Colour::Green,
        "copy" => Colour::Cyan,
        "vacation" => Colour::Yellow,
        "worker_del" | "vacation_del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" | "sign" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the audit log, colorized per operation. With a filter, only
    /// rows whose rendered line matches the regex are shown.
    pub fn print_log(pool: &mut DbPool, filter: Option<&str>) -> AppResult<()> {
        let re = filter
            .map(regex::Regex::new)
            .transpose()
            .map_err(|e| AppError::Other(format!("Bad filter: {}", e)))?;

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            Ok(LogEntry {
                id: row.get(0)?,
                date: chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date),
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            let e = r?;
            if let Some(re) = &re {
                let line = format!("{} {} {}", e.date, e.op_target(), e.message);
                if !re.is_match(&strip_ansi(&line)) {
                    continue;
                }
            }
            entries.push(e);
        }

        if entries.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        let op_width = entries
            .iter()
            .map(|e| e.op_target().len())
            .max()
            .unwrap_or(0)
            .min(40);

        for e in entries {
            let color = color_for_operation(&e.operation);
            println!(
                "{:>4}  {}  {}  {}",
                e.id,
                e.date,
                color.paint(format!("{:<width$}", e.op_target(), width = op_width)),
                e.message
            );
        }

        Ok(())
    }
}
