//! Externally persisted records. These are the data contracts shared with
//! the remote store; the UI mutates them one field at a time.

pub mod cascade_analysis;
pub mod direct_analysis;
pub mod risk_file;
pub mod scenario;
pub mod validation;

pub use cascade_analysis::{CascadeAnalysis, CascadeMatrix};
pub use direct_analysis::{DirectAnalysis, ScenarioQuali};
pub use risk_file::{RiskCategory, RiskFile, RiskType};
pub use scenario::{CodeField, ImpactDimension, Scenario, ScenarioCodes, ScenarioSet};
pub use validation::{Validation, ValidationSection};

/// Generate a fresh opaque record identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Split a field key like `h_c` into its base (`h`) and scenario.
pub(crate) fn split_scenario_key(key: &str) -> Option<(&str, Scenario)> {
    let (base, suffix) = key.rsplit_once('_')?;
    Some((base, Scenario::from_suffix(suffix)?))
}

/// Normalize a form value: blank strings clear the field.
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
