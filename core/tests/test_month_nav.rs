// core/tests/test_month_nav.rs
use chrono::NaiveDate;

use studygraph_core::models::Month;

fn month(year: i32, m: u32) -> Month {
    Month::new(year, m).expect("gyldig måned")
}

#[test]
fn next_rolls_december_into_january() {
    assert_eq!(month(2026, 12).next(), month(2027, 1));
    assert_eq!(month(2026, 6).next(), month(2026, 7));
}

#[test]
fn prev_rolls_january_into_december() {
    assert_eq!(month(2026, 1).prev(), month(2025, 12));
    assert_eq!(month(2026, 7).prev(), month(2026, 6));
}

#[test]
fn next_and_prev_are_inverses() {
    let start = month(2026, 1);
    assert_eq!(start.next().prev(), start);
    assert_eq!(start.prev().next(), start);
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(month(2026, 1).days_in_month(), 31);
    assert_eq!(month(2026, 4).days_in_month(), 30);
    assert_eq!(month(2026, 2).days_in_month(), 28);
    assert_eq!(month(2028, 2).days_in_month(), 29);
    assert_eq!(month(2026, 12).days_in_month(), 31);
}

#[test]
fn contains_uses_half_open_interval() {
    let jan = month(2026, 1);
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).expect("gyldig dato");
    assert!(jan.contains(d(2026, 1, 1)));
    assert!(jan.contains(d(2026, 1, 31)));
    assert!(!jan.contains(d(2026, 2, 1)));
    assert!(!jan.contains(d(2025, 12, 31)));
}

#[test]
fn from_date_normalizes_to_year_and_month() {
    let d = NaiveDate::from_ymd_opt(2026, 3, 17).expect("gyldig dato");
    assert_eq!(Month::from_date(d), month(2026, 3));
    assert_eq!(Month::from_date(d).first_day(), NaiveDate::from_ymd_opt(2026, 3, 1).expect("gyldig dato"));
}

#[test]
fn label_matches_header_format() {
    assert_eq!(month(2026, 2).label(), "2026-Feb.");
    assert_eq!(month(2025, 12).label(), "2025-Dec.");
}

#[test]
fn invalid_month_numbers_are_rejected() {
    assert!(Month::new(2026, 0).is_none());
    assert!(Month::new(2026, 13).is_none());
}
