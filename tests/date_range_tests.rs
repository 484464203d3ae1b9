mod common;
use common::d;

use rattendance::errors::AppError;
use rattendance::utils::date::{month_of, parse_period, resolve_range};

#[test]
fn test_period_single_tokens() {
    let r = parse_period("2024").unwrap();
    assert_eq!((r.start(), r.end()), (d("2024-01-01"), d("2024-12-31")));

    let r = parse_period("2024-02").unwrap();
    assert_eq!((r.start(), r.end()), (d("2024-02-01"), d("2024-02-29")));

    let r = parse_period("2023-02").unwrap();
    assert_eq!(r.end(), d("2023-02-28"));

    let r = parse_period("2024-06-18").unwrap();
    assert_eq!((r.start(), r.end()), (d("2024-06-18"), d("2024-06-18")));
}

#[test]
fn test_period_ranges() {
    let r = parse_period("2024-06:2024-08").unwrap();
    assert_eq!((r.start(), r.end()), (d("2024-06-01"), d("2024-08-31")));

    let r = parse_period("2023:2024").unwrap();
    assert_eq!((r.start(), r.end()), (d("2023-01-01"), d("2024-12-31")));

    let r = parse_period("2024-06-01:2024-06-10").unwrap();
    assert_eq!(r.len_days(), 10);

    let r = parse_period("2024-12:2024-12").unwrap();
    assert_eq!(r.end(), d("2024-12-31"));
}

#[test]
fn test_period_errors() {
    assert!(matches!(parse_period("2024-6"), Err(AppError::InvalidDate(_))));
    assert!(matches!(parse_period("2024-13"), Err(AppError::InvalidDate(_))));
    assert!(matches!(
        parse_period("2024-06:2024-06-10"),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        parse_period("2024-08:2024-06"),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn test_resolve_range_defaults_to_month_of_today() {
    let r = resolve_range(None, None, None, d("2024-06-18")).unwrap();
    assert_eq!(r, month_of(d("2024-06-18")).unwrap());
    assert_eq!((r.start(), r.end()), (d("2024-06-01"), d("2024-06-30")));
}

#[test]
fn test_resolve_range_explicit_bounds() {
    let today = d("2030-01-01");

    let r = resolve_range(Some("2024-06-03"), Some("2024-06-07"), None, today).unwrap();
    assert_eq!((r.start(), r.end()), (d("2024-06-03"), d("2024-06-07")));

    // open ends are closed with the month of the given bound
    let r = resolve_range(Some("2024-06-10"), None, None, today).unwrap();
    assert_eq!(r.end(), d("2024-06-30"));

    let r = resolve_range(None, Some("2024-06-10"), None, today).unwrap();
    assert_eq!(r.start(), d("2024-06-01"));

    let r = resolve_range(None, None, Some("2024-05"), today).unwrap();
    assert_eq!(r.start(), d("2024-05-01"));
}

#[test]
fn test_resolve_range_rejects_bad_input() {
    let today = d("2024-06-18");

    assert!(matches!(
        resolve_range(Some("2024-06-07"), Some("2024-06-03"), None, today),
        Err(AppError::InvalidRange { .. })
    ));
    assert!(matches!(
        resolve_range(Some("06/03/2024"), Some("2024-06-07"), None, today),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_resolve_range_rejects_dates_past_the_calendar() {
    let today = d("2024-06-18");

    assert!(matches!(
        resolve_range(Some("+262142-12-30"), Some("+262142-12-31"), None, today),
        Err(AppError::RangeOutOfBounds { .. })
    ));
}
