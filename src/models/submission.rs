use super::session::Session;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /attendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSubmission {
    pub class_id: i64,
    pub date: NaiveDate, // serialised as "YYYY-MM-DD"
    pub session: Session,
    pub absentees: Vec<u32>,
    pub marked_by: i64,
}

/// Backend acknowledgement. Any extra field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: Option<String>,
}
