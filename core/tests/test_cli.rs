// core/tests/test_cli.rs
use chrono::NaiveDate;
use serde_json::json;

use studygraph_core::cli::{print_month_report, print_property_summary};
use studygraph_core::models::{ActivityObservation, Month, MonthlyGoal};
use studygraph_core::{build_daily_series, compose_month_view};

#[test]
fn month_report_smoke() {
    // røyk-test: rapporten skal kunne skrives for en komponert måned
    let observations = vec![
        ActivityObservation {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("gyldig dato"),
            minutes: 30.0,
        },
        ActivityObservation {
            date: NaiveDate::from_ymd_opt(2026, 1, 3).expect("gyldig dato"),
            minutes: 45.0,
        },
    ];
    let goals = vec![MonthlyGoal {
        month: Month::new(2026, 1).expect("gyldig måned"),
        goal_minutes: 600.0,
    }];

    let series = build_daily_series(&observations);
    let view = compose_month_view(&series, &goals, Month::new(2026, 1).expect("gyldig måned"));

    print_month_report(&view);
}

#[test]
fn month_report_smoke_without_data() {
    let view = compose_month_view(&[], &[], Month::new(2026, 1).expect("gyldig måned"));
    print_month_report(&view);
}

#[test]
fn property_summary_lists_names_and_types() {
    let pages = vec![json!({
        "properties": {
            "日付": { "type": "date", "date": null },
            "勉強時間(分)": { "type": "number", "number": null }
        }
    })];
    print_property_summary(&pages);
    print_property_summary(&[]);
}
