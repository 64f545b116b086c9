use std::collections::HashMap;
use std::time::Duration;

use crate::assignment::resolve_version;
use crate::config::TestConfig;
use crate::error::{GriddleError, Result};
use crate::ports::{CookieOptions, PersistencePort, RandomSource};
use crate::variant::Variant;
use crate::weights::ThresholdTable;

/// Namespace prefix for persisted assignments: one entry per scope under the
/// key `"griddle-<scope>"`, value = the chosen version name.
pub const PERSIST_PREFIX: &str = "griddle";

/// Owns the scope → variant map. Built once per visitor-resolution context
/// (one registry per request under concurrent hosting), read-only afterward.
/// Any configuration error aborts construction of the whole registry.
#[derive(Debug)]
pub struct TestRegistry {
    variants: HashMap<String, Variant>,
}

impl TestRegistry {
    /// Validate every config and resolve every scope up front. `is_crawler`
    /// is decided once, externally, before any test is built: a crawler load
    /// gets crawler variants for every scope, a real-user load gets sticky
    /// weighted assignments for every scope.
    pub fn new(
        configs: &[TestConfig],
        is_crawler: bool,
        store: &mut dyn PersistencePort,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        let mut variants: HashMap<String, Variant> = HashMap::with_capacity(configs.len());

        for config in configs {
            let scope = config.scope_or_default().to_string();
            if variants.contains_key(&scope) {
                return Err(GriddleError::DuplicateScope(scope));
            }
            config.validate()?;

            let variant = if is_crawler {
                tracing::debug!(
                    "scope '{}' registered for crawler, designated version: {:?}",
                    scope,
                    config.version_for_crawlers
                );
                Variant::Crawler {
                    designated: config.version_for_crawlers.clone(),
                }
            } else {
                let table = ThresholdTable::build(&scope, &config.versions, &config.weights)?;
                let key = format!("{}-{}", PERSIST_PREFIX, scope);
                let options = CookieOptions {
                    domain: config.domain.clone(),
                    max_age: config
                        .expiration_days
                        .map(|days| Duration::from_secs(u64::from(days) * 86_400)),
                };
                let assigned = resolve_version(&table, &key, &options, store, rng);
                Variant::RealUser {
                    versions: config.versions.clone(),
                    assigned,
                }
            };
            variants.insert(scope, variant);
        }

        Ok(Self { variants })
    }

    /// Build a registry from a JSON array of configs.
    pub fn from_json(
        json: &str,
        is_crawler: bool,
        store: &mut dyn PersistencePort,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        let configs: Vec<TestConfig> = serde_json::from_str(json)?;
        Self::new(&configs, is_crawler, store, rng)
    }

    /// Should a component tied to any of `query_versions` render in `scope`?
    /// Querying a scope that was never registered is a configuration error.
    pub fn should_render(
        &self,
        query_versions: &[&str],
        scope: &str,
        for_crawler_path: bool,
    ) -> Result<bool> {
        let variant = self
            .variants
            .get(scope)
            .ok_or_else(|| GriddleError::UnknownScope(scope.to_string()))?;
        Ok(variant.should_render(query_versions, for_crawler_path))
    }

    /// The version `scope` resolved to, if any.
    pub fn resolved_version(&self, scope: &str) -> Result<Option<&str>> {
        let variant = self
            .variants
            .get(scope)
            .ok_or_else(|| GriddleError::UnknownScope(scope.to_string()))?;
        Ok(variant.resolved_version())
    }

    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }
}
