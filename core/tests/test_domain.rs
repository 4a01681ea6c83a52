// core/tests/test_domain.rs
use chrono::NaiveDate;

use studygraph_core::models::MonthPoint;
use studygraph_core::month_view::{moving_avg_domain, FALLBACK_AVG_DOMAIN};

fn point(avg: f64) -> MonthPoint {
    MonthPoint {
        date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("gyldig dato"),
        minutes: 0.0,
        monthly_cumulative: 0.0,
        moving_avg_60d: avg,
    }
}

#[test]
fn empty_values_give_fallback_domain() {
    assert_eq!(moving_avg_domain(&[]), FALLBACK_AVG_DOMAIN);
    assert_eq!(moving_avg_domain(&[]), [0.0, 300.0]);
}

#[test]
fn identical_values_get_minimum_buffer() {
    // alle synlige verdier 5.0: padding tvinges til 20 => [0, 25]
    let points = vec![point(5.0), point(5.0), point(5.0)];
    let domain = moving_avg_domain(&points);
    assert_eq!(domain, [0.0, 25.0]);
}

#[test]
fn padding_is_twenty_percent_of_span() {
    // min 100, max 200: padding 20 => [80, 220]
    let points = vec![point(100.0), point(150.0), point(200.0)];
    let domain = moving_avg_domain(&points);
    assert!((domain[0] - 80.0).abs() < 1e-9);
    assert!((domain[1] - 220.0).abs() < 1e-9);
}

#[test]
fn low_bound_is_floored_at_zero_for_nonnegative_data() {
    // min 10, max 110: padding 20 => lav ville vært -10, gulves til 0
    let points = vec![point(10.0), point(110.0)];
    let domain = moving_avg_domain(&points);
    assert_eq!(domain[0], 0.0);
    assert!((domain[1] - 130.0).abs() < 1e-9);
}

#[test]
fn negative_values_disable_the_zero_floor() {
    let points = vec![point(-50.0), point(50.0)];
    let domain = moving_avg_domain(&points);
    assert!((domain[0] - -70.0).abs() < 1e-9);
    assert!((domain[1] - 70.0).abs() < 1e-9);
}

#[test]
fn non_finite_values_are_excluded() {
    let points = vec![point(f64::NAN), point(10.0), point(20.0)];
    let domain = moving_avg_domain(&points);
    // spenn 10, padding 2
    assert!((domain[0] - 8.0).abs() < 1e-9);
    assert!((domain[1] - 22.0).abs() < 1e-9);
}

#[test]
fn only_non_finite_values_give_fallback() {
    let points = vec![point(f64::NAN), point(f64::INFINITY)];
    assert_eq!(moving_avg_domain(&points), FALLBACK_AVG_DOMAIN);
}
