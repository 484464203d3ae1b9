use crate::core::matrix::AttendanceMatrix;
use crate::errors::AppResult;
use crate::export::model::matrix_to_rows;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the whole matrix as pretty-printed JSON.
pub(crate) fn export_json(m: &AttendanceMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(m)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one CSV row per cell (header from serde).
pub(crate) fn export_csv(m: &AttendanceMatrix, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in matrix_to_rows(m) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
