use crate::errors::{AppError, AppResult};
use crate::models::DateRange;
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Range covering the whole month that contains `d`.
pub fn month_of(d: NaiveDate) -> AppResult<DateRange> {
    let first = month_first(d.year(), d.month())?;
    let last = month_last(d.year(), d.month())?;
    DateRange::new(first, last)
}

/// Parse a `--period` expression into a date range.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<DateRange> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{p}: start and end must have the same format"
            )));
        }

        let (s, _) = period_bounds(start)?;
        let (_, e) = period_bounds(end)?;
        return DateRange::new(s, e);
    }

    let (s, e) = period_bounds(p)?;
    DateRange::new(s, e)
}

/// First and last day of a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn period_bounds(tok: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(tok.to_string());

    match tok.len() {
        4 => {
            let y: i32 = tok.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let (ys, ms) = tok.split_once('-').ok_or_else(invalid)?;
            let y: i32 = ys.parse().map_err(|_| invalid())?;
            let m: u32 = ms.parse().map_err(|_| invalid())?;
            Ok((month_first(y, m)?, month_last(y, m)?))
        }
        10 => {
            let d = parse_date(tok).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_first(y: i32, m: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| AppError::InvalidDate(format!("{y:04}-{m:02}")))
}

fn month_last(y: i32, m: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    month_first(ny, nm)?
        .pred_opt()
        .ok_or_else(|| AppError::InvalidDate(format!("{y:04}-{m:02}")))
}

/// Resolve the range of the `view` command.
/// `--from/--to` win over `--period`; with nothing given, the month of `today`.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    period: Option<&str>,
    today: NaiveDate,
) -> AppResult<DateRange> {
    match (from, to, period) {
        (Some(f), Some(t), _) => DateRange::parse(f, t),
        (Some(f), None, _) => {
            let start = parse_date(f).ok_or_else(|| AppError::InvalidDate(f.to_string()))?;
            DateRange::new(start, month_of(start)?.end())
        }
        (None, Some(t), _) => {
            let end = parse_date(t).ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
            DateRange::new(month_of(end)?.start(), end)
        }
        (None, None, Some(p)) => parse_period(p),
        (None, None, None) => month_of(today),
    }
}
