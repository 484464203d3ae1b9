use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub roll_number: u32,
    pub name: String,
}

/// Name lookup by roll number; "Unknown" when the roll is not in the roster.
pub fn student_name(students: &[Student], roll: u32) -> &str {
    students
        .iter()
        .find(|s| s.roll_number == roll)
        .map(|s| s.name.as_str())
        .unwrap_or("Unknown")
}

/// Class name lookup by id; empty when the class is not listed.
pub fn class_name(classes: &[ClassInfo], id: i64) -> &str {
    classes
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or("")
}
