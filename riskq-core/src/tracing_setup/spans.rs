//! Span definitions per operation: aggregation, worker requests, saves,
//! wizard navigation, report export.

/// Create an aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($risk_file_id:expr, $submissions:expr) => {
        tracing::info_span!("riskq.aggregation", risk_file_id = %$risk_file_id, submissions = $submissions)
    };
}

/// Create a worker request span.
#[macro_export]
macro_rules! worker_span {
    ($risk_file_id:expr) => {
        tracing::info_span!("riskq.worker", risk_file_id = %$risk_file_id)
    };
}

/// Create a persistence span.
#[macro_export]
macro_rules! save_span {
    ($field:expr) => {
        tracing::debug_span!("riskq.save", field = %$field)
    };
}

/// Create a report export span.
#[macro_export]
macro_rules! export_span {
    ($risk_file_id:expr) => {
        tracing::info_span!("riskq.export", risk_file_id = %$risk_file_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const AGGREGATION: &str = "riskq.aggregation";
    pub const WORKER: &str = "riskq.worker";
    pub const SAVE: &str = "riskq.save";
    pub const EXPORT: &str = "riskq.export";
}
