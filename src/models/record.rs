use super::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// One dated attendance entry for a student, as returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self { date, status }
    }

    pub fn present(date: NaiveDate) -> Self {
        Self::new(date, AttendanceStatus::Present)
    }

    pub fn absent(date: NaiveDate) -> Self {
        Self::new(date, AttendanceStatus::Absent)
    }
}
