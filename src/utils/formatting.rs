//! Formatting utilities for CLI and export outputs.

/// Render minutes either as "HH:MM" (short) or "HHh MMm".
pub fn mins2readable(mins: i64, short: bool) -> String {
    let hours = mins.abs() / 60;
    let minutes = mins.abs() % 60;

    if short {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}
