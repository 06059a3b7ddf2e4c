use serde::{Deserialize, Serialize};

use super::defaults;

/// Background computation worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Pending requests buffered before `compute` waits for capacity.
    pub queue_capacity: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: defaults::DEFAULT_WORKER_QUEUE_CAPACITY,
        }
    }
}
