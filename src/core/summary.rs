use crate::core::matrix::AttendanceMatrix;
use crate::models::DayStatus;
use serde::Serialize;

/// Totals shown under the heat-map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub present: usize,
    pub absent: usize,
    pub total: usize,
    pub percentage: f64,
}

impl AttendanceSummary {
    /// Counts only classified cells, so weekend and out-of-range
    /// records never reach the totals.
    pub fn from_matrix(m: &AttendanceMatrix) -> Self {
        let present = m
            .cells()
            .filter(|c| c.status == DayStatus::Present)
            .count();
        let absent = m.cells().filter(|c| c.status == DayStatus::Absent).count();
        let total = present + absent;

        let percentage = if total > 0 {
            present as f64 * 100.0 / total as f64
        } else {
            0.0
        };

        Self {
            present,
            absent,
            total,
            percentage,
        }
    }

    /// e.g. "83.3%"
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}
