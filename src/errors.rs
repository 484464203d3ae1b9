//! Unified application error type.
//! All modules (api, core, db, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Local operation log
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Backend
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status} for {url}")]
    Backend { status: u16, url: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("Date range {start}..{end} reaches beyond the supported calendar")]
    RangeOutOfBounds { start: String, end: String },

    #[error("Invalid session: {0} (use fullday, forenoon or afternoon)")]
    InvalidSession(String),

    // ---------------------------
    // Marking errors
    // ---------------------------
    #[error("Roll number {roll} is not enrolled in class {class_id}")]
    UnknownRollNumber { roll: u32, class_id: i64 },

    #[error("Class {0} not found")]
    UnknownClass(i64),

    #[error("No absentees given: add at least one roll number with --absent")]
    NoAbsentees,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
