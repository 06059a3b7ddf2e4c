//! Error taxonomy. One enum per subsystem, wrapped by [`RiskqError`].

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod record_error;
pub mod store_error;
pub mod wizard_error;
pub mod worker_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use export_error::ExportError;
pub use record_error::RecordError;
pub use store_error::StoreError;
pub use wizard_error::WizardError;
pub use worker_error::WorkerError;

/// Top-level error for the riskq workspace.
#[derive(Debug, thiserror::Error)]
pub enum RiskqError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("worker error: {0}")]
    Worker(#[from] WorkerError),

    #[error("wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for RiskqError {
    fn error_code(&self) -> &'static str {
        match self {
            RiskqError::Store(e) => e.error_code(),
            RiskqError::Record(e) => e.error_code(),
            RiskqError::Worker(e) => e.error_code(),
            RiskqError::Wizard(e) => e.error_code(),
            RiskqError::Config(e) => e.error_code(),
            RiskqError::Export(e) => e.error_code(),
            RiskqError::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type RiskqResult<T> = Result<T, RiskqError>;
