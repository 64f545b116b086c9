//! Client-side A/B test assignment engine.
//!
//! Given a declarative set of named test scopes, each offering two or more
//! named versions, griddle decides once per scope per visitor which version
//! that visitor sees, persists the decision so repeat visits are consistent,
//! and answers "should this component render for version X in scope Y".
//!
//! The host supplies three collaborators through [`ports`]: a persistence
//! store (typically a cookie jar), a crawler detector evaluated once per
//! request, and a uniform random source. Build one [`TestRegistry`] per
//! visitor-resolution context:
//!
//! ```
//! use griddle::{MemoryStore, TestConfig, TestRegistry, ThreadRngSource};
//!
//! let configs = vec![TestConfig::new(Some("promo"), &["old", "new"])];
//! let mut store = MemoryStore::new();
//! let mut rng = ThreadRngSource;
//! let registry = TestRegistry::new(&configs, false, &mut store, &mut rng).unwrap();
//!
//! let render_new = registry.should_render(&["new"], "promo", false).unwrap();
//! let render_old = registry.should_render(&["old"], "promo", false).unwrap();
//! assert_ne!(render_new, render_old);
//! ```

pub mod assignment;
pub mod config;
pub mod error;
pub mod ports;
pub mod registry;
pub mod variant;
pub mod weights;

pub use config::{TestConfig, DEFAULT_SCOPE};
pub use error::{GriddleError, Result};
pub use ports::{
    CookieOptions, CrawlerDetector, MemoryStore, PersistencePort, RandomSource, SequenceSource,
    ThreadRngSource, UserAgentDetector,
};
pub use registry::{TestRegistry, PERSIST_PREFIX};
pub use variant::Variant;
pub use weights::{ThresholdEntry, ThresholdTable};
