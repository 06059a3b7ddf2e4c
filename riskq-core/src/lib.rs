//! # riskq-core
//!
//! Foundation crate for the riskq assessment toolkit.
//! Defines the persisted record contracts, the computed aggregate shape,
//! the store trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod models;
pub mod records;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::RiskqConfig;
pub use context::{AppContext, Breadcrumb};
pub use errors::{RiskqError, RiskqResult};
pub use models::{AnalysisData, Quality};
pub use records::{
    CascadeAnalysis, DirectAnalysis, ImpactDimension, RiskCategory, RiskFile, RiskType, Scenario,
    ScenarioCodes, Validation,
};
