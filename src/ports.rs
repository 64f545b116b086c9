use std::collections::HashMap;
use std::time::Duration;

/// Cookie-style scoping for a persisted assignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOptions {
    pub domain: Option<String>,
    pub max_age: Option<Duration>,
}

/// Where assignments stick. Last-write-wins per key; `get` returning `None`
/// means "not yet assigned", which is the normal first-visit case.
pub trait PersistencePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str, options: &CookieOptions);
}

/// Uniform draw in `[0, 100)`.
pub trait RandomSource {
    fn next_percent(&mut self) -> f64;
}

/// Resolved once per request, before any registry is built. The crawler/real
/// branch is global — every scope in a given load is treated the same way.
pub trait CrawlerDetector {
    fn is_crawler(&self) -> bool;
}

/// HashMap-backed store. Suitable for tests and for server-rendered contexts
/// where each request carries its own throwaway persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PersistencePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str, _options: &CookieOptions) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Production randomness via `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_percent(&mut self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen_range(0.0..100.0)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted. Useful for
/// deterministic tests and for reproducing a reported assignment.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    draws: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "SequenceSource needs at least one draw");
        Self { draws, next: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_percent(&mut self) -> f64 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

const CRAWLER_TOKENS: &[&str] = &[
    "googlebot",
    "bingbot",
    "yandexbot",
    "duckduckbot",
    "baiduspider",
    "slurp",
    "applebot",
    "facebookexternalhit",
    "twitterbot",
    "linkedinbot",
];

/// Case-insensitive substring match against known crawler user-agent tokens.
#[derive(Debug, Clone)]
pub struct UserAgentDetector {
    user_agent: String,
}

impl UserAgentDetector {
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_ascii_lowercase(),
        }
    }
}

impl CrawlerDetector for UserAgentDetector {
    fn is_crawler(&self) -> bool {
        CRAWLER_TOKENS.iter().any(|t| self.user_agent.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("griddle-default"), None);
        store.set("griddle-default", "a", &CookieOptions::default());
        assert_eq!(store.get("griddle-default").as_deref(), Some("a"));
    }

    #[test]
    fn memory_store_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set("k", "first", &CookieOptions::default());
        store.set("k", "second", &CookieOptions::default());
        assert_eq!(store.get("k").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sequence_source_replays_and_cycles() {
        let mut rng = SequenceSource::new(vec![30.0, 70.0]);
        assert_eq!(rng.next_percent(), 30.0);
        assert_eq!(rng.next_percent(), 70.0);
        assert_eq!(rng.next_percent(), 30.0);
    }

    #[test]
    fn thread_rng_source_stays_in_range() {
        let mut rng = ThreadRngSource;
        for _ in 0..1000 {
            let d = rng.next_percent();
            assert!((0.0..100.0).contains(&d), "draw out of range: {}", d);
        }
    }

    #[test]
    fn user_agent_detector_matches_googlebot() {
        let ua = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
        assert!(UserAgentDetector::new(ua).is_crawler());
    }

    #[test]
    fn user_agent_detector_ignores_regular_browsers() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
        assert!(!UserAgentDetector::new(ua).is_crawler());
    }

    #[test]
    fn user_agent_detector_is_case_insensitive() {
        assert!(UserAgentDetector::new("BINGBOT/2.0").is_crawler());
    }
}
