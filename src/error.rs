use thiserror::Error;

/// Every detectable failure is a configuration error: surfaced synchronously,
/// fatal to the whole registry, never retried or recovered internally. A
/// missing persisted value is not an error — that is the normal first visit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GriddleError {
    #[error("Duplicate test scope: {0}")]
    DuplicateScope(String),

    #[error("Unknown test scope: {0}")]
    UnknownScope(String),

    #[error("Scope '{scope}' declares {count} version(s), at least two are required")]
    InsufficientVersions { scope: String, count: usize },

    #[error("Duplicate version '{version}' in scope '{scope}'")]
    DuplicateVersion { scope: String, version: String },

    #[error("Crawler version '{version}' is not in the version list for scope '{scope}'")]
    InvalidCrawlerVersion { scope: String, version: String },

    #[error("Weighted version '{version}' is not in the version list for scope '{scope}'")]
    UnknownWeightedVersion { scope: String, version: String },

    #[error("Explicit weights for scope '{scope}' sum to {total}, must stay below 100")]
    WeightOverflow { scope: String, total: f64 },

    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, GriddleError>;

impl From<serde_json::Error> for GriddleError {
    fn from(e: serde_json::Error) -> Self {
        GriddleError::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_scope() {
        let e = GriddleError::DuplicateScope("promo".into());
        assert!(format!("{}", e).contains("promo"));
    }

    #[test]
    fn error_display_weight_overflow_includes_total() {
        let e = GriddleError::WeightOverflow {
            scope: "banner".into(),
            total: 120.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("banner"));
        assert!(msg.contains("120"));
    }

    #[test]
    fn error_display_duplicate_version() {
        let e = GriddleError::DuplicateVersion {
            scope: "default".into(),
            version: "a".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("default"));
        assert!(msg.contains("'a'"));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: GriddleError = json_err.into();
        assert!(matches!(err, GriddleError::Json(_)));
    }
}
