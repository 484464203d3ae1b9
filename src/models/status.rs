use serde::{Deserialize, Serialize};

/// Status carried by a backend attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Lenient parser for backend values ("present", "Absent", "P", "a" ...).
    /// Anything else yields `None` and the record is treated as missing.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "present" | "p" => Some(Self::Present),
            "absent" | "a" => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Classification of a single calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Present,
    Absent,
    NoData,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Present => "present",
            DayStatus::Absent => "absent",
            DayStatus::NoData => "no-data",
        }
    }
}

impl From<AttendanceStatus> for DayStatus {
    fn from(s: AttendanceStatus) -> Self {
        match s {
            AttendanceStatus::Present => DayStatus::Present,
            AttendanceStatus::Absent => DayStatus::Absent,
        }
    }
}
