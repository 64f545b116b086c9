use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GriddleError, Result};

/// Scope used when a config declares none.
pub const DEFAULT_SCOPE: &str = "default";

/// Declarative description of one test scope. Immutable once read.
///
/// `weights` is a partial map from version name to percentage; versions left
/// out split the remaining percentage evenly. Key order is significant — the
/// weighted buckets are laid out in the order the map declares them.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    #[serde(default)]
    pub scope: Option<String>,
    pub versions: Vec<String>,
    #[serde(default)]
    pub weights: IndexMap<String, f64>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub expiration_days: Option<u32>,
    #[serde(default)]
    pub version_for_crawlers: Option<String>,
}

impl TestConfig {
    pub fn new(scope: Option<&str>, versions: &[&str]) -> Self {
        Self {
            scope: scope.map(str::to_string),
            versions: versions.iter().map(|s| s.to_string()).collect(),
            weights: IndexMap::new(),
            domain: None,
            expiration_days: None,
            version_for_crawlers: None,
        }
    }

    pub fn scope_or_default(&self) -> &str {
        self.scope.as_deref().unwrap_or(DEFAULT_SCOPE)
    }

    /// Version-list and crawler-version checks. Weight validation happens
    /// when the threshold table is built.
    pub fn validate(&self) -> Result<()> {
        let scope = self.scope_or_default();
        if self.versions.len() < 2 {
            return Err(GriddleError::InsufficientVersions {
                scope: scope.to_string(),
                count: self.versions.len(),
            });
        }
        for (i, version) in self.versions.iter().enumerate() {
            if self.versions[..i].contains(version) {
                return Err(GriddleError::DuplicateVersion {
                    scope: scope.to_string(),
                    version: version.clone(),
                });
            }
        }
        if let Some(crawler_version) = &self.version_for_crawlers {
            if !self.versions.contains(crawler_version) {
                return Err(GriddleError::InvalidCrawlerVersion {
                    scope: scope.to_string(),
                    version: crawler_version.clone(),
                });
            }
        }
        Ok(())
    }
}
