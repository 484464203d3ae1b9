use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// Inclusive calendar-day range. `start <= end` holds for every value, and
/// the whole weeks around both ends are representable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let back = Days::new(start.weekday().num_days_from_sunday() as u64);
        let fwd = Days::new(6 - end.weekday().num_days_from_sunday() as u64);
        if start.checked_sub_days(back).is_none() || end.checked_add_days(fwd).is_none() {
            return Err(AppError::RangeOutOfBounds {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self { start, end })
    }

    /// Build a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let s = parse_day(start)?;
        let e = parse_day(end)?;
        Self::new(s, e)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}
