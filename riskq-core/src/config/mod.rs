pub mod aggregation_config;
pub mod cache_config;
pub mod charts_config;
pub mod defaults;
pub mod observability_config;
pub mod persistence_config;
pub mod report_config;
pub mod worker_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use aggregation_config::AggregationConfig;
pub use cache_config::CacheConfig;
pub use charts_config::ChartsConfig;
pub use observability_config::ObservabilityConfig;
pub use persistence_config::PersistenceConfig;
pub use report_config::ReportConfig;
pub use worker_config::WorkerConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating every subsystem section.
/// Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskqConfig {
    pub aggregation: AggregationConfig,
    pub persistence: PersistenceConfig,
    pub worker: WorkerConfig,
    pub charts: ChartsConfig,
    pub report: ReportConfig,
    pub cache: CacheConfig,
    pub observability: ObservabilityConfig,
}

impl RiskqConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: display.clone(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no subsystem can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let agg = &self.aggregation;
        if agg.consensus_tolerance.is_nan() || agg.consensus_tolerance < 0.0 {
            return Err(invalid(
                "aggregation.consensus_tolerance",
                format!("must be >= 0, got {}", agg.consensus_tolerance),
            ));
        }
        let weights = [
            ("aggregation.human_weight", agg.human_weight),
            ("aggregation.societal_weight", agg.societal_weight),
            ("aggregation.environmental_weight", agg.environmental_weight),
            ("aggregation.financial_weight", agg.financial_weight),
        ];
        for (field, weight) in weights {
            if weight.is_nan() || weight < 0.0 {
                return Err(invalid(field, format!("must be >= 0, got {weight}")));
            }
        }
        if agg.total_weight() <= 0.0 {
            return Err(invalid(
                "aggregation",
                "dimension weights must sum to a positive number".to_string(),
            ));
        }

        if self.worker.queue_capacity == 0 {
            return Err(invalid("worker.queue_capacity", "must be > 0".to_string()));
        }

        let charts = &self.charts;
        if charts.left_inset < 0.0 || charts.right_inset < 0.0 {
            return Err(invalid("charts", "insets must be >= 0".to_string()));
        }
        if charts.left_inset + charts.right_inset >= charts.track_width {
            return Err(invalid(
                "charts.track_width",
                format!(
                    "track width {} leaves no room between insets {} and {}",
                    charts.track_width, charts.left_inset, charts.right_inset
                ),
            ));
        }

        if self.report.blocks_per_page == 0 {
            return Err(invalid("report.blocks_per_page", "must be > 0".to_string()));
        }

        if self.cache.max_entries == 0 {
            return Err(invalid("cache.max_entries", "must be > 0".to_string()));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message,
    }
}
