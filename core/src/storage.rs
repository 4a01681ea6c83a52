use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::PropertyNames;

/// Standard plassering av konfigurasjonsfilen.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("i/o-feil mot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("ugyldig konfigurasjon ({path}): {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("fant verken konfigurasjonsfil eller miljøvariablene NOTION_TOKEN/DATABASE_ID/GOAL_DATABASE_ID")]
    Missing,
}

/// Tilgangsdata og databasenavn for Notion-integrasjonen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secrets {
    pub notion_token: String,
    pub database_id: String,
    pub goal_database_id: String,
    /// Egenskapsnavnene i databasene, kan overstyres i filen.
    #[serde(default)]
    pub properties: PropertyNames,
}

/// Leser konfigurasjon fra disk (JSON). Finnes ikke filen, prøves
/// miljøvariablene NOTION_TOKEN, DATABASE_ID og GOAL_DATABASE_ID.
pub fn load_secrets(path: &str) -> Result<Secrets, ConfigError> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io { path: path.to_string(), source: e })?;
        let mut de = serde_json::Deserializer::from_str(&contents);
        let secrets: Secrets = serde_path_to_error::deserialize(&mut de).map_err(|e| {
            ConfigError::Decode {
                path: format!("{}: {}", path, e.path()),
                source: e.into_inner(),
            }
        })?;
        log::info!("konfigurasjon lastet fra {}", path);
        Ok(secrets)
    } else {
        log::warn!("fant ikke {}, prøver miljøvariabler", path);
        secrets_from_env().ok_or(ConfigError::Missing)
    }
}

/// Lagrer konfigurasjon til disk som JSON (pretty-print).
pub fn save_secrets(secrets: &Secrets, path: &str) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(secrets)
        .map_err(|e| ConfigError::Decode { path: path.to_string(), source: e })?;
    std::fs::write(path, json)
        .map_err(|e| ConfigError::Io { path: path.to_string(), source: e })?;
    log::info!("konfigurasjon lagret til {}", path);
    Ok(())
}

fn secrets_from_env() -> Option<Secrets> {
    Some(Secrets {
        notion_token: std::env::var("NOTION_TOKEN").ok()?,
        database_id: std::env::var("DATABASE_ID").ok()?,
        goal_database_id: std::env::var("GOAL_DATABASE_ID").ok()?,
        properties: PropertyNames::default(),
    })
}
