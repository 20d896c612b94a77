//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid absence type: {0}")]
    InvalidAbsence(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Ledger rules
    // ---------------------------
    #[error("Month has validation errors:\n{0}")]
    Validation(String),

    #[error("Day cannot be edited: {0}")]
    EditRestricted(String),

    #[error("No eligible days in range")]
    EmptyCopyRange,

    // ---------------------------
    // Vacation rules
    // ---------------------------
    #[error("A vacation request already exists for {0}")]
    DuplicateRequest(String),

    #[error("Vacation quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Vacation request {0} not found")]
    RequestNotFound(i64),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    // ---------------------------
    // Workers
    // ---------------------------
    #[error("Worker {0} not found")]
    WorkerNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
