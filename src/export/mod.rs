mod csv;
mod json;
mod pdf;
pub mod report;

pub use report::{MonthReport, build_report};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Write a finalized month report in the requested format.
pub fn write_report(
    report: &MonthReport,
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(file, report)?,
        ExportFormat::Json => json::write_json(file, report)?,
        ExportFormat::Pdf => pdf::write_pdf(path, report)?,
    }

    notify_export_success(format.as_str().to_uppercase().as_str(), path);
    Ok(())
}
