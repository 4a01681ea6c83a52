// core/src/source.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde_json::Value;
use thiserror::Error;

use crate::metrics::{self, fetch_cache_hit_total, fetch_cache_miss_total, Metrics};

/// Hentede resultater regnes som ferske i fem minutter.
pub const FETCH_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http-forespørsel mot Notion feilet: {0}")]
    Http(#[from] ureq::Error),
    #[error("klarte ikke å dekode respons ({path}): {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("i/o-feil under lesing av respons: {0}")]
    Io(#[from] std::io::Error),
}

/// Kilde for rå rader ("property bags") fra en database.
/// Prod: NotionClient. Test: StaticRecordSource.
pub trait RecordSource {
    fn fetch_records(&self, database_id: &str) -> Result<Vec<Value>, FetchError>;
}

/// Statisk kilde med faste rader, for tester og frakoblet kjøring.
#[derive(Debug, Default)]
pub struct StaticRecordSource {
    pub records: Vec<Value>,
}

impl RecordSource for StaticRecordSource {
    fn fetch_records(&self, _database_id: &str) -> Result<Vec<Value>, FetchError> {
        Ok(self.records.clone())
    }
}

/// TTL-cache rundt en annen kilde, nøklet på database-id.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    metrics: &'static Metrics,
    cache: Mutex<HashMap<String, (Instant, Vec<Value>)>>,
}

impl<S: RecordSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self::with_ttl(inner, FETCH_CACHE_TTL)
    }

    pub fn with_ttl(inner: S, ttl: Duration) -> Self {
        Self::with_metrics(inner, ttl, metrics::global())
    }

    pub fn with_metrics(inner: S, ttl: Duration, metrics: &'static Metrics) -> Self {
        Self { inner, ttl, metrics, cache: Mutex::new(HashMap::new()) }
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    fn fetch_records(&self, database_id: &str) -> Result<Vec<Value>, FetchError> {
        let mut cache = self.cache.lock().unwrap();

        if let Some((stored_at, records)) = cache.get(database_id) {
            if stored_at.elapsed() < self.ttl {
                fetch_cache_hit_total(self.metrics).inc();
                return Ok(records.clone());
            }
        }

        log::debug!("cache utløpt eller tom for {}, henter på nytt", database_id);
        let records = self.inner.fetch_records(database_id)?;
        cache.insert(database_id.to_string(), (Instant::now(), records.clone()));
        fetch_cache_miss_total(self.metrics).inc();
        Ok(records)
    }
}
