use crate::core::matrix::AttendanceMatrix;
use serde::Serialize;

/// Flat row for the CSV export: one line per grid cell.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CellExport {
    pub week: usize,
    pub date: String,
    pub weekday: String,
    pub status: String,
}

pub(crate) fn matrix_to_rows(m: &AttendanceMatrix) -> Vec<CellExport> {
    m.weeks
        .iter()
        .enumerate()
        .flat_map(|(i, w)| {
            w.days.iter().map(move |c| CellExport {
                week: i + 1,
                date: c.date.format("%Y-%m-%d").to_string(),
                weekday: c.date.format("%a").to_string(),
                status: c.status.as_str().to_string(),
            })
        })
        .collect()
}
