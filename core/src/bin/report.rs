// core/src/bin/report.rs
use anyhow::{bail, Result};

use studygraph_core::cli;
use studygraph_core::models::Month;
use studygraph_core::storage::DEFAULT_SECRETS_PATH;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("report");
    let secrets_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_SECRETS_PATH);

    match command {
        "report" => {
            let month = match args.get(2) {
                Some(raw) => Some(parse_month_arg(raw)?),
                None => None,
            };
            cli::run_month_report(secrets_path, month)
        }
        "inspect" => cli::run_inspect(secrets_path),
        "verify" => cli::run_verify(secrets_path),
        other => bail!("ukjent kommando '{}' (bruk report|inspect|verify)", other),
    }
}

/// Månedsargument på formen "YYYY-MM", f.eks. 2026-01.
fn parse_month_arg(raw: &str) -> Result<Month> {
    let parsed = raw
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<u32>().ok()?)))
        .and_then(|(y, m)| Month::new(y, m));
    match parsed {
        Some(month) => Ok(month),
        None => bail!("ugyldig måned '{}' (forventet YYYY-MM)", raw),
    }
}
