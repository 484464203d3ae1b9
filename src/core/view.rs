use crate::api::ApiClient;
use crate::core::matrix::{AttendanceMatrix, build_matrix};
use crate::core::summary::AttendanceSummary;
use crate::errors::AppResult;
use crate::models::DateRange;

pub struct ViewOutcome {
    pub matrix: AttendanceMatrix,
    pub summary: AttendanceSummary,
    /// Rows the backend returned that survived decoding.
    pub records: usize,
}

pub struct ViewLogic;

impl ViewLogic {
    pub fn fetch(api: &ApiClient, student_id: &str, range: &DateRange) -> AppResult<ViewOutcome> {
        let records = api.fetch_attendance(student_id, range)?;
        let matrix = build_matrix(&records, range);
        let summary = AttendanceSummary::from_matrix(&matrix);

        Ok(ViewOutcome {
            matrix,
            summary,
            records: records.len(),
        })
    }
}
