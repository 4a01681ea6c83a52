// core/src/notion_api.rs
use serde::Deserialize;
use serde_json::{json, Value};
use ureq::Agent;

use crate::metrics::{self, notion_pages_fetched_total};
use crate::source::{FetchError, RecordSource};

pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";
pub const QUERY_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
struct QueryResponse {
    results: Vec<Value>,
    has_more: bool,
    next_cursor: Option<String>,
}

/// Notion-klient, enkel blocking-versjon (ureq).
pub struct NotionClient {
    agent: Agent,
    token: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build();
        Self { agent, token: token.into() }
    }

    fn query_page(
        &self,
        database_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<QueryResponse, FetchError> {
        let url = format!("{}/databases/{}/query", NOTION_API_BASE, database_id);

        let mut body = json!({ "page_size": QUERY_PAGE_SIZE });
        // start_cursor må utelates helt når den mangler, null gir 400 fra Notion
        if let Some(cursor) = start_cursor {
            body["start_cursor"] = json!(cursor);
        }

        let resp = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Notion-Version", NOTION_VERSION)
            .send_json(body)?;

        decode_query_response(resp.into_reader())
    }

    /// Autentiseringsprobe mot users/me. Returnerer bot-brukerens navn.
    pub fn verify_auth(&self) -> Result<String, FetchError> {
        let resp = self
            .agent
            .get(&format!("{}/users/me", NOTION_API_BASE))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Notion-Version", NOTION_VERSION)
            .call()?;
        let user: Value = resp.into_json()?;

        let name = user
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| user.pointer("/bot/owner/user/name").and_then(Value::as_str))
            .unwrap_or("Unknown")
            .to_string();
        Ok(name)
    }

    /// Sjekker at integrasjonen har tilgang til databasen.
    pub fn verify_database(&self, database_id: &str) -> Result<(), FetchError> {
        self.agent
            .get(&format!("{}/databases/{}", NOTION_API_BASE, database_id))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Notion-Version", NOTION_VERSION)
            .call()?;
        Ok(())
    }

    /// Henter kun første resultatside, brukes av inspeksjonsverktøyet.
    pub fn fetch_sample(&self, database_id: &str) -> Result<Vec<Value>, FetchError> {
        Ok(self.query_page(database_id, None)?.results)
    }
}

fn decode_query_response(reader: impl std::io::Read) -> Result<QueryResponse, FetchError> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    serde_path_to_error::deserialize(&mut de).map_err(|err| FetchError::Decode {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

impl RecordSource for NotionClient {
    /// Paginert uthenting: følger next_cursor til has_more er false.
    fn fetch_records(&self, database_id: &str) -> Result<Vec<Value>, FetchError> {
        let mut results: Vec<Value> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.query_page(database_id, cursor.as_deref())?;
            notion_pages_fetched_total(metrics::global()).inc();
            results.extend(page.results);

            if !page.has_more {
                break;
            }
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                // has_more uten cursor: stopp heller enn å hente side én på nytt
                None => break,
            }
        }

        log::info!("hentet {} rader fra database {}", results.len(), database_id);
        Ok(results)
    }
}
