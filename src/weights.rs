use indexmap::IndexMap;

use crate::error::{GriddleError, Result};

/// Round to one decimal place. All thresholds are built at this precision so
/// the resulting table is byte-for-byte reproducible across platforms.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdEntry {
    pub threshold: f64,
    pub version: String,
}

/// Cumulative threshold table over (0, 100]. Thresholds are strictly
/// increasing, each version appears exactly once, and the final threshold is
/// forced to exactly 100 regardless of rounding drift. Built once per scope,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable {
    entries: Vec<ThresholdEntry>,
}

impl ThresholdTable {
    /// Build the table from the scope's full ordered version list and a
    /// partial weight map. Explicitly weighted versions take their buckets
    /// first, in the weight map's own key order; the unweighted remainder
    /// splits what is left of the 100% evenly, in original list order.
    pub fn build(
        scope: &str,
        versions: &[String],
        weights: &IndexMap<String, f64>,
    ) -> Result<Self> {
        let mut remaining: Vec<&str> = versions.iter().map(String::as_str).collect();
        let mut entries = Vec::with_capacity(versions.len());
        let mut total = 0.0_f64;

        for (version, weight) in weights {
            if !versions.contains(version) {
                return Err(GriddleError::UnknownWeightedVersion {
                    scope: scope.to_string(),
                    version: version.clone(),
                });
            }
            total += round1(*weight);
            entries.push(ThresholdEntry {
                threshold: total,
                version: version.clone(),
            });
            remaining.retain(|v| v != version);
        }

        // Explicit weights must leave room for the remainder. The check also
        // applies when nothing remains unweighted, so a fully weighted scope
        // summing to exactly 100 is rejected.
        if total >= 100.0 {
            return Err(GriddleError::WeightOverflow {
                scope: scope.to_string(),
                total,
            });
        }

        if !remaining.is_empty() {
            let share = round1((100.0 - total) / remaining.len() as f64);
            for version in remaining {
                total += share;
                entries.push(ThresholdEntry {
                    threshold: total,
                    version: version.to_string(),
                });
            }
        }

        // Rounding drift correction: the last bucket always closes at 100.
        if let Some(last) = entries.last_mut() {
            last.threshold = 100.0;
        }

        Ok(Self { entries })
    }

    /// The version whose half-open bucket contains `draw`: the first entry
    /// whose threshold is strictly greater than the draw.
    pub fn pick(&self, draw: f64) -> &str {
        for entry in &self.entries {
            if entry.threshold > draw {
                return &entry.version;
            }
        }
        // Unreachable for draws in [0, 100): the last threshold is 100.
        &self.entries[self.entries.len() - 1].version
    }

    pub fn contains_version(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.version == name)
    }

    pub fn entries(&self) -> &[ThresholdEntry] {
        &self.entries
    }
}
