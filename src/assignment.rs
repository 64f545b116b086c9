use crate::ports::{CookieOptions, PersistencePort, RandomSource};
use crate::weights::ThresholdTable;

/// Resolve the sticky version for one scope.
///
/// A persisted value that still names a valid version wins outright — no
/// re-roll, no re-write. Anything else (absent, or stale after a config
/// change) triggers exactly one weighted draw and exactly one write.
pub fn resolve_version(
    table: &ThresholdTable,
    key: &str,
    options: &CookieOptions,
    store: &mut dyn PersistencePort,
    rng: &mut dyn RandomSource,
) -> String {
    if let Some(saved) = store.get(key) {
        if table.contains_version(&saved) {
            return saved;
        }
    }

    let draw = rng.next_percent();
    let version = table.pick(draw).to_string();
    tracing::debug!(
        "assigned version '{}' under key '{}' (draw {:.1})",
        version,
        key,
        draw
    );
    store.set(key, &version, options);
    version
}
