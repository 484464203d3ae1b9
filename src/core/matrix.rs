//! Attendance matrix: sparse dated records + a date range → dense grid of
//! week columns (Sunday..Saturday), one status per day.
//!
//! Pure transform: no clock, no locale, no I/O.

use crate::models::{AttendanceRecord, AttendanceStatus, DateRange, DayStatus};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashMap;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// One calendar week, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekColumn {
    pub days: [DayCell; DAYS_PER_WEEK],
}

impl WeekColumn {
    pub fn first_day(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1].date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceMatrix {
    pub range: DateRange,
    pub weeks: Vec<WeekColumn>,
}

impl AttendanceMatrix {
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cell_count(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// All cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<DayStatus> {
        self.cells().find(|c| c.date == date).map(|c| c.status)
    }
}

/// Sunday of the week containing `d`, clamped to the first representable date.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_sunday() as u64;
    d.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// Saturday of the week containing `d`, clamped to the last representable date.
pub fn week_end(d: NaiveDate) -> NaiveDate {
    let fwd = 6 - d.weekday().num_days_from_sunday() as u64;
    d.checked_add_days(Days::new(fwd)).unwrap_or(NaiveDate::MAX)
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classify one day. Precedence: weekend, then out of range, then record.
fn classify(
    date: NaiveDate,
    range: &DateRange,
    by_date: &HashMap<NaiveDate, AttendanceStatus>,
) -> DayStatus {
    if is_weekend(date) || !range.contains(date) {
        return DayStatus::NoData;
    }

    by_date
        .get(&date)
        .map(|s| DayStatus::from(*s))
        .unwrap_or(DayStatus::NoData)
}

/// Build the week-column grid covering `range`.
///
/// Duplicate records for the same date: the last one in `records` wins.
pub fn build_matrix(records: &[AttendanceRecord], range: &DateRange) -> AttendanceMatrix {
    let mut by_date = HashMap::with_capacity(records.len());
    for r in records {
        by_date.insert(r.date, r.status);
    }

    let first = week_start(range.start());
    let last = week_end(range.end());
    let columns = ((last - first).num_days() as usize + 1).div_ceil(DAYS_PER_WEEK);

    let weeks = (0..columns)
        .map(|w| {
            let sunday = first + Days::new((w * DAYS_PER_WEEK) as u64);
            let days = std::array::from_fn(|i| {
                let date = sunday + Days::new(i as u64);
                DayCell {
                    date,
                    status: classify(date, range, &by_date),
                }
            });
            WeekColumn { days }
        })
        .collect();

    AttendanceMatrix {
        range: *range,
        weeks,
    }
}

