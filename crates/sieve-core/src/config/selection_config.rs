use serde::{Deserialize, Serialize};

use super::defaults;

/// Selection engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of records split between the representative and anomalous sets
    /// of a visualization batch.
    pub visualization_count: usize,
    /// Whether a visualization batch also carries a random set.
    pub include_random: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            visualization_count: defaults::DEFAULT_VISUALIZATION_COUNT,
            include_random: defaults::DEFAULT_INCLUDE_RANDOM,
        }
    }
}
