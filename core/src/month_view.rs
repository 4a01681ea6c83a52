// core/src/month_view.rs
use chrono::NaiveDate;
use ordered_float::OrderedFloat;

use crate::models::{DailySeriesPoint, Month, MonthPoint, MonthView, MonthlyGoal, TargetPoint};

/// Fast akseområde når måneden ikke har noen snittverdier å vise.
pub const FALLBACK_AVG_DOMAIN: [f64; 2] = [0.0, 300.0];
/// Luft over/under synlige snittverdier, som andel av spennet.
pub const AVG_DOMAIN_PADDING: f64 = 0.2;
/// Minste buffer (minutter/dag) når alle synlige verdier er like.
pub const MIN_AVG_PADDING: f64 = 20.0;

/// Komponerer månedsbildet for valgt måned: utsnitt av dagserien,
/// månedsintern kumulativ sum, mållinje og akseområde for snittet.
/// Totalfunksjon, manglende data gir tomme sekvenser, aldri feil.
pub fn compose_month_view(
    series: &[DailySeriesPoint],
    goals: &[MonthlyGoal],
    month: Month,
) -> MonthView {
    let mut points = Vec::new();
    let mut monthly_cumulative = 0.0;
    for p in series.iter().filter(|p| month.contains(p.date)) {
        // kumulativen starter på null ved månedsskiftet
        monthly_cumulative += p.minutes;
        points.push(MonthPoint {
            date: p.date,
            minutes: p.minutes,
            monthly_cumulative,
            moving_avg_60d: p.moving_avg_60d,
        });
    }

    // Første mål som matcher måneden vinner, eventuelle duplikater ignoreres
    let goal_minutes = goals
        .iter()
        .find(|g| g.month == month)
        .map(|g| g.goal_minutes)
        .unwrap_or(0.0);

    let target_points = if goal_minutes > 0.0 {
        target_curve(month, goal_minutes)
    } else {
        // mål på null eller fraværende: ingen mållinje, ikke en flat nullinje
        Vec::new()
    };

    let moving_avg_domain = moving_avg_domain(&points);

    MonthView { month, points, target_points, moving_avg_domain }
}

/// Lineær mållinje fra 0 ved dag 0 til fullt mål på månedens siste dag.
fn target_curve(month: Month, goal_minutes: f64) -> Vec<TargetPoint> {
    let days = month.days_in_month();
    (1..=days)
        .filter_map(|day| {
            let date = NaiveDate::from_ymd_opt(month.year(), month.month(), day)?;
            Some(TargetPoint {
                date,
                target_cumulative: goal_minutes * (day as f64 / days as f64),
            })
        })
        .collect()
}

/// Akseområde [lav, høy] for de synlige snittverdiene. Ikke-finite
/// verdier holdes utenfor. Gulvet på 0 gjelder bare når alle verdier
/// er ikke-negative.
pub fn moving_avg_domain(points: &[MonthPoint]) -> [f64; 2] {
    let values: Vec<f64> = points
        .iter()
        .map(|p| p.moving_avg_60d)
        .filter(|v| v.is_finite())
        .collect();

    let (min_v, max_v) = match (
        values.iter().copied().map(OrderedFloat).min(),
        values.iter().copied().map(OrderedFloat).max(),
    ) {
        (Some(lo), Some(hi)) => (lo.into_inner(), hi.into_inner()),
        _ => return FALLBACK_AVG_DOMAIN,
    };

    let mut padding = (max_v - min_v) * AVG_DOMAIN_PADDING;
    if padding == 0.0 {
        padding = MIN_AVG_PADDING;
    }

    let low = if min_v < 0.0 {
        min_v - padding
    } else {
        (min_v - padding).max(0.0)
    };
    [low, max_v + padding]
}
