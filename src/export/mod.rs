mod fs_utils;
mod json_csv;
mod model;

pub use model::CellExport;

use crate::core::matrix::AttendanceMatrix;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `m` to `file` (absolute path required).
    pub fn export(m: &AttendanceMatrix, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        fs_utils::ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => json_csv::export_csv(m, &path),
            ExportFormat::Json => json_csv::export_json(m, &path),
        }
    }

    /// Rows as written by the CSV export.
    pub fn rows(m: &AttendanceMatrix) -> Vec<CellExport> {
        model::matrix_to_rows(m)
    }
}
