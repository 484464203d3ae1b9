//! Plain-text report of a submitted attendance, in WhatsApp markup,
//! plus the `wa.me` share link built from it.

use crate::models::roster::{class_name, student_name};
use crate::models::{AttendanceSubmission, ClassInfo, Student};

pub const WHATSAPP_BASE: &str = "https://wa.me/?text=";

pub fn format_report(
    sub: &AttendanceSubmission,
    classes: &[ClassInfo],
    students: &[Student],
) -> String {
    let absentees = sub
        .absentees
        .iter()
        .map(|roll| format!("{}. {}", roll, student_name(students, *roll)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "*Attendance Report*\n\n*Class:* {}\n*Date:* {}\n*Session:* {}\n\n*Absentees:*\n{}",
        class_name(classes, sub.class_id),
        sub.date.format("%Y-%m-%d"),
        sub.session.as_str().to_uppercase(),
        absentees
    )
}

pub fn whatsapp_url(report: &str) -> String {
    format!("{}{}", WHATSAPP_BASE, urlencoding::encode(report))
}
