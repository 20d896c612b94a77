use super::report::MonthReport;
use csv::Writer;

/// Scrive il foglio presenze in CSV nel file indicato.
pub fn write_csv(path: &str, report: &MonthReport) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "day", "date", "weekday", "morning", "afternoon", "absence", "total", "signed",
    ])?;

    for row in &report.rows {
        wtr.write_record(&[
            row.day.to_string(),
            row.date.clone(),
            row.weekday.clone(),
            row.morning.clone(),
            row.afternoon.clone(),
            row.absence.clone(),
            row.total.clone(),
            row.signed.to_string(),
        ])?;
    }

    wtr.write_record([
        "total",
        "",
        "",
        "",
        "",
        "",
        &report.summary.total_formatted,
        "",
    ])?;

    wtr.flush()?;
    Ok(())
}
