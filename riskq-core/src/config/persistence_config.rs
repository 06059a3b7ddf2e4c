use serde::{Deserialize, Serialize};

use super::defaults;

/// Debounced persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Quiet period after the last keystroke before a save is issued.
    pub debounce_ms: u64,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            debounce_ms: defaults::DEFAULT_DEBOUNCE_MS,
        }
    }
}
