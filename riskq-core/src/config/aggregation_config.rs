use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregation subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Maximum spread (in scale positions) between expert submissions that
    /// still counts as consensus.
    pub consensus_tolerance: f64,
    /// Weight of the human dimension in the total impact.
    pub human_weight: f64,
    /// Weight of the societal dimension in the total impact.
    pub societal_weight: f64,
    /// Weight of the environmental dimension in the total impact.
    pub environmental_weight: f64,
    /// Weight of the financial dimension in the total impact.
    pub financial_weight: f64,
}

impl AggregationConfig {
    /// Sum of the four dimension weights.
    pub fn total_weight(&self) -> f64 {
        self.human_weight + self.societal_weight + self.environmental_weight + self.financial_weight
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            consensus_tolerance: defaults::DEFAULT_CONSENSUS_TOLERANCE,
            human_weight: defaults::DEFAULT_HUMAN_WEIGHT,
            societal_weight: defaults::DEFAULT_SOCIETAL_WEIGHT,
            environmental_weight: defaults::DEFAULT_ENVIRONMENTAL_WEIGHT,
            financial_weight: defaults::DEFAULT_FINANCIAL_WEIGHT,
        }
    }
}
