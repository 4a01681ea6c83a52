use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{Month, MonthView};
use crate::month_view::compose_month_view;
use crate::normalize::{normalize_activity_records, normalize_goal_records};
use crate::notion_api::NotionClient;
use crate::series::build_daily_series;
use crate::source::{CachedSource, RecordSource};
use crate::storage::load_secrets;

/// Henter, normaliserer og skriver månedsrapporten for valgt måned
/// (inneværende måned hvis ingen er oppgitt).
pub fn run_month_report(secrets_path: &str, month: Option<Month>) -> Result<()> {
    let secrets = load_secrets(secrets_path).context("kunne ikke laste konfigurasjon")?;
    let source = CachedSource::new(NotionClient::new(secrets.notion_token.as_str()));

    let raw_activity = source
        .fetch_records(&secrets.database_id)
        .context("henting av læringslogg feilet")?;
    let raw_goals = source
        .fetch_records(&secrets.goal_database_id)
        .context("henting av måldata feilet")?;

    let observations = normalize_activity_records(&raw_activity, &secrets.properties);
    let goals = normalize_goal_records(&raw_goals, &secrets.properties);
    let series = build_daily_series(&observations);

    let month = month.unwrap_or_else(Month::current);
    let view = compose_month_view(&series, &goals, month);
    print_month_report(&view);
    Ok(())
}

pub fn print_month_report(view: &MonthView) {
    println!("--- {} ---", view.month.label());
    if view.points.is_empty() {
        println!("(ingen data for denne måneden)");
    }
    for p in &view.points {
        println!(
            "{}  {:>6.0} min  sum {:>7.0}  snitt60 {:>6.1}",
            p.date.format("%d"),
            p.minutes,
            p.monthly_cumulative,
            p.moving_avg_60d
        );
    }
    if let Some(last) = view.target_points.last() {
        println!(
            "mål: {:.0} min innen dag {}",
            last.target_cumulative,
            view.target_points.len()
        );
    }
    println!(
        "snittakse: [{:.1}, {:.1}]",
        view.moving_avg_domain[0], view.moving_avg_domain[1]
    );
}

/// Skanner begge databasene og lister egenskapsnavn/-typer fra en
/// eksempelrad, til hjelp når kolonnenavn ikke stemmer.
pub fn run_inspect(secrets_path: &str) -> Result<()> {
    let secrets = load_secrets(secrets_path).context("kunne ikke laste konfigurasjon")?;
    let client = NotionClient::new(secrets.notion_token.as_str());

    for (label, id) in [
        ("læringslogg", secrets.database_id.as_str()),
        ("måldatabase", secrets.goal_database_id.as_str()),
    ] {
        println!("\nSkanner {} ({})...", label, id);
        match client.fetch_sample(id) {
            Ok(pages) => print_property_summary(&pages),
            Err(err) => println!("[ERROR] {}", err),
        }
    }
    Ok(())
}

pub fn print_property_summary(pages: &[Value]) {
    let props = pages
        .first()
        .and_then(|p| p.get("properties"))
        .and_then(Value::as_object);
    match props {
        None => println!("[WARN] databasen er tom (0 rader)"),
        Some(props) => {
            println!("[OK] fant {} rad(er). Egenskaper:", pages.len());
            for (name, value) in props {
                let type_name = value.get("type").and_then(Value::as_str).unwrap_or("unknown");
                println!(" - '{}' ({})", name, type_name);
            }
        }
    }
}

/// Verifiserer konfigurasjon, autentisering og databasetilgang.
pub fn run_verify(secrets_path: &str) -> Result<()> {
    let secrets = load_secrets(secrets_path).context("kunne ikke laste konfigurasjon")?;
    println!("[OK] konfigurasjon lastet");

    let client = NotionClient::new(secrets.notion_token.as_str());
    let bot = client
        .verify_auth()
        .context("autentisering mot Notion feilet")?;
    println!("[OK] autentisert som {}", bot);

    for (label, id) in [
        ("læringslogg", secrets.database_id.as_str()),
        ("måldatabase", secrets.goal_database_id.as_str()),
    ] {
        match client.verify_database(id) {
            Ok(()) => println!("[OK] har tilgang til {}", label),
            Err(err) => println!("[ERROR] {}: {}", label, err),
        }
    }
    Ok(())
}
