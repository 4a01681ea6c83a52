// core/src/normalize.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{ActivityObservation, Month, MonthlyGoal};

/// Navnene på egenskapene i Notion-databasene. Standardverdiene matcher
/// den opprinnelige loggdatabasen, men kan overstyres i konfigurasjonen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyNames {
    pub date: String,
    pub minutes: String,
    pub goal_title: String,
    pub goal_hours: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            date: "日付".to_string(),
            minutes: "勉強時間(分)".to_string(),
            goal_title: "月タイトル".to_string(),
            goal_hours: "目標学習時間".to_string(),
        }
    }
}

/// Normaliserer rå loggrader til typede observasjoner.
/// Rader uten gyldig dato droppes, manglende minutter blir 0.
pub fn normalize_activity_records(
    pages: &[Value],
    props: &PropertyNames,
) -> Vec<ActivityObservation> {
    let mut out = Vec::with_capacity(pages.len());
    let mut dropped = 0usize;
    for page in pages {
        match observation_from_page(page, props) {
            Some(obs) => out.push(obs),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("droppet {} loggrader uten gyldig dato", dropped);
    }
    out
}

/// Normaliserer rå målrader. Rader uten parsbar månedsetikett droppes
/// stille, de stopper aldri resten av batchen.
pub fn normalize_goal_records(pages: &[Value], props: &PropertyNames) -> Vec<MonthlyGoal> {
    let mut out = Vec::with_capacity(pages.len());
    let mut dropped = 0usize;
    for page in pages {
        match goal_from_page(page, props) {
            Some(goal) => out.push(goal),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!("droppet {} målrader uten parsbar månedsetikett", dropped);
    }
    out
}

fn observation_from_page(page: &Value, props: &PropertyNames) -> Option<ActivityObservation> {
    let properties = page.get("properties")?;

    let date_prop = properties.get(&props.date)?;
    if date_prop.get("type").and_then(Value::as_str) != Some("date") {
        return None;
    }
    let start = date_prop.get("date")?.get("start")?.as_str()?;
    let date = parse_record_date(start)?;

    // Manglende varighet er "logget en dag uten tid", ikke en feil
    let minutes = number_or_zero(properties.get(&props.minutes));

    Some(ActivityObservation { date, minutes })
}

fn goal_from_page(page: &Value, props: &PropertyNames) -> Option<MonthlyGoal> {
    let properties = page.get("properties")?;

    let title = properties
        .get(&props.goal_title)?
        .get("title")?
        .as_array()?
        .first()?
        .get("text")?
        .get("content")?
        .as_str()?;
    let month = parse_month_label(title)?;

    // Målet er oppgitt i timer
    let goal_minutes = number_or_zero(properties.get(&props.goal_hours)) * 60.0;

    Some(MonthlyGoal { month, goal_minutes })
}

/// Number-egenskap med defaulting: manglende egenskap, feil type og
/// eksplisitt null gir alle 0.
fn number_or_zero(prop: Option<&Value>) -> f64 {
    prop.filter(|p| p.get("type").and_then(Value::as_str) == Some("number"))
        .and_then(|p| p.get("number"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Notion-datoer kan være rene datoer eller fulle ISO-tidsstempler.
/// Dagbøttingen bruker kun de ti første tegnene (YYYY-MM-DD).
fn parse_record_date(start: &str) -> Option<NaiveDate> {
    let day = start.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parser etiketter på formen "2026-Jan": fire siffer, bindestrek,
/// trebokstavs månedsforkortelse.
pub fn parse_month_label(label: &str) -> Option<Month> {
    let (year_part, month_part) = label.split_once('-')?;
    if year_part.len() != 4 {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;
    let month = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| abbr.eq_ignore_ascii_case(month_part))? as u32
        + 1;
    Month::new(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_happy_path() {
        let month = parse_month_label("2026-Jan").expect("skal parse");
        assert_eq!(month.year(), 2026);
        assert_eq!(month.month(), 1);

        let desember = parse_month_label("2025-Dec").expect("skal parse");
        assert_eq!(desember.month(), 12);
    }

    #[test]
    fn month_label_is_case_insensitive() {
        // strptime-%b i originalkilden godtar vilkårlig casing
        assert!(parse_month_label("2026-jan").is_some());
        assert!(parse_month_label("2026-FEB").is_some());
    }

    #[test]
    fn month_label_rejects_garbage() {
        assert!(parse_month_label("").is_none());
        assert!(parse_month_label("Jan-2026").is_none());
        assert!(parse_month_label("2026-January").is_none());
        assert!(parse_month_label("26-Jan").is_none());
        assert!(parse_month_label("2026-Jan-01").is_none());
        assert!(parse_month_label("20a6-Jan").is_none());
    }

    #[test]
    fn record_date_accepts_timestamps() {
        let d = parse_record_date("2026-01-05T09:30:00.000+09:00").expect("skal parse");
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 1, 5).expect("gyldig dato"));
        assert!(parse_record_date("2026-1-5").is_none());
        assert!(parse_record_date("").is_none());
    }
}
