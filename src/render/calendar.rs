//! Terminal heat-map of an attendance matrix.
//! Weeks are columns, days are rows (Sun..Sat).

use crate::core::matrix::{AttendanceMatrix, DAYS_PER_WEEK};
use crate::models::DayStatus;
use crate::utils::colors::{GREEN, GREY, RED, paint};
use chrono::{Datelike, NaiveDate};

const ROW_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const LABEL_W: usize = 4;
const CELL_W: usize = 2;

fn glyph(status: DayStatus, color: bool) -> String {
    if color {
        let c = match status {
            DayStatus::Present => GREEN,
            DayStatus::Absent => RED,
            DayStatus::NoData => GREY,
        };
        paint("■", c, true)
    } else {
        match status {
            DayStatus::Present => "P".to_string(),
            DayStatus::Absent => "A".to_string(),
            DayStatus::NoData => "·".to_string(),
        }
    }
}

/// Month labels over the columns where a month starts.
/// The first column always carries the month of the range start; a label
/// that would overlap the previous one moves to the next free column.
fn month_header(m: &AttendanceMatrix) -> String {
    let mut out = " ".repeat(LABEL_W);
    let mut next_free = LABEL_W;
    let mut pending: Option<NaiveDate> = None;

    for (i, week) in m.weeks.iter().enumerate() {
        let starts_month = if i == 0 {
            Some(m.range.start())
        } else {
            week.days.iter().map(|c| c.date).find(|d| d.day() == 1)
        };

        let Some(day) = starts_month.or(pending) else { continue };
        let pos = LABEL_W + i * CELL_W;
        if pos < next_free {
            pending = Some(day);
            continue;
        }
        pending = None;

        out.push_str(&" ".repeat(pos - out.chars().count()));
        let label = day.format("%b").to_string();
        next_free = pos + label.chars().count() + 1;
        out.push_str(&label);
    }

    out.trim_end().to_string()
}

pub fn render_calendar(m: &AttendanceMatrix, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&month_header(m));
    out.push('\n');

    for (row, label) in ROW_LABELS.iter().enumerate() {
        out.push_str(&format!("{:<width$}", label, width = LABEL_W));
        let cells = m
            .weeks
            .iter()
            .map(|w| glyph(w.days[row].status, color))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&cells);
        out.push('\n');
    }

    out
}

pub fn render_legend(color: bool) -> String {
    format!(
        "{} Present   {} Absent   {} No data / weekend",
        glyph(DayStatus::Present, color),
        glyph(DayStatus::Absent, color),
        glyph(DayStatus::NoData, color)
    )
}
