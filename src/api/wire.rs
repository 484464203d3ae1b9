//! Lenient decoding of backend attendance rows.
//!
//! The records endpoint is not under our control: rows may carry extra
//! fields, miss the status, or use the `is_present` column of the backend
//! table instead. Rows that cannot be understood are dropped so that the
//! matching day renders as no-data.

use crate::models::{AttendanceRecord, AttendanceStatus};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    is_present: Option<Value>,
}

fn status_from_value(v: &Value) -> Option<AttendanceStatus> {
    match v {
        Value::String(s) => AttendanceStatus::from_wire(s),
        Value::Bool(true) => Some(AttendanceStatus::Present),
        Value::Bool(false) => Some(AttendanceStatus::Absent),
        _ => None,
    }
}

/// Accepts "YYYY-MM-DD" and datetime strings starting with it.
fn date_from_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| s.get(..10).and_then(|p| NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()))
}

pub fn decode_record(v: Value) -> Option<AttendanceRecord> {
    let raw: RawRecord = serde_json::from_value(v).ok()?;
    let date = date_from_str(raw.date.as_deref()?)?;

    let status = match (&raw.status, &raw.is_present) {
        (Some(s), _) => status_from_value(s)?,
        (None, Some(p)) => status_from_value(p)?,
        (None, None) => return None,
    };

    Some(AttendanceRecord::new(date, status))
}

pub fn decode_records(rows: Vec<Value>) -> Vec<AttendanceRecord> {
    rows.into_iter().filter_map(decode_record).collect()
}
