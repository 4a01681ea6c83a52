// core/src/series.rs
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{ActivityObservation, DailySeriesPoint};

/// Vindusbredde for glidende snitt av daglig tempo.
pub const MOVING_AVG_WINDOW_DAYS: usize = 60;

/// Bygger den hull-fylte dagserien over hele historikken:
/// 1) grupper per dato og summer minutter (flere rader samme dag er additive)
/// 2) ett punkt per kalenderdag fra første til siste observerte dato
/// 3) løpende totalsum og glidende 60-dagerssnitt med voksende vindu
///
/// Grupperingen via BTreeMap gjør resultatet uavhengig av inputrekkefølgen.
pub fn build_daily_series(observations: &[ActivityObservation]) -> Vec<DailySeriesPoint> {
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for obs in observations {
        *per_day.entry(obs.date).or_insert(0.0) += obs.minutes;
    }

    let (first, last) = match (per_day.keys().next(), per_day.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        // ingen observasjoner: tom serie, nedstrøms håndterer "ingen data"
        _ => return Vec::new(),
    };

    let mut out: Vec<DailySeriesPoint> = Vec::new();
    let mut cumulative = 0.0;
    let mut window_sum = 0.0;

    let mut day = first;
    loop {
        let minutes = per_day.get(&day).copied().unwrap_or(0.0);
        let i = out.len();

        cumulative += minutes;
        window_sum += minutes;
        if i >= MOVING_AVG_WINDOW_DAYS {
            window_sum -= out[i - MOVING_AVG_WINDOW_DAYS].minutes;
        }
        // vinduet vokser fra 1 opp til 60 i starten av historikken
        let width = (i + 1).min(MOVING_AVG_WINDOW_DAYS) as f64;

        out.push(DailySeriesPoint {
            date: day,
            minutes,
            cumulative_total: cumulative,
            moving_avg_60d: window_sum / width,
        });

        if day == last {
            break;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    out
}
