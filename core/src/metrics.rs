// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

/// Tellerne for hentelaget, samlet i eget registry.
pub struct Metrics {
    pub registry: Registry,
    fetch_cache_hit: IntCounter,
    fetch_cache_miss: IntCounter,
    notion_pages_fetched: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let fetch_cache_hit = IntCounter::new(
            "studygraph_fetch_cache_hit_total",
            "Antall treff i hentecachen",
        )
        .expect("gyldig tellernavn");
        let fetch_cache_miss = IntCounter::new(
            "studygraph_fetch_cache_miss_total",
            "Antall bom i hentecachen",
        )
        .expect("gyldig tellernavn");
        let notion_pages_fetched = IntCounter::new(
            "studygraph_notion_pages_fetched_total",
            "Antall resultatsider hentet fra Notion",
        )
        .expect("gyldig tellernavn");

        registry
            .register(Box::new(fetch_cache_hit.clone()))
            .expect("registrering av teller");
        registry
            .register(Box::new(fetch_cache_miss.clone()))
            .expect("registrering av teller");
        registry
            .register(Box::new(notion_pages_fetched.clone()))
            .expect("registrering av teller");

        Self { registry, fetch_cache_hit, fetch_cache_miss, notion_pages_fetched }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Prosessglobalt registry, brukes der ingen egen `Metrics` er koblet inn.
pub fn global() -> &'static Metrics {
    &METRICS
}

pub fn fetch_cache_hit_total(metrics: &Metrics) -> &IntCounter {
    &metrics.fetch_cache_hit
}

pub fn fetch_cache_miss_total(metrics: &Metrics) -> &IntCounter {
    &metrics.fetch_cache_miss
}

pub fn notion_pages_fetched_total(metrics: &Metrics) -> &IntCounter {
    &metrics.notion_pages_fetched
}
