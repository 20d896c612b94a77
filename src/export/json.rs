use super::report::MonthReport;
use std::io;

/// Scrive il report mensile in JSON formattato.
pub fn write_json(path: &str, report: &MonthReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    std::fs::write(path, json)
}
