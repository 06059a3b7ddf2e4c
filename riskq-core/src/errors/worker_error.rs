use super::error_code::{self, ErrorCode};

/// Background computation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkerError {
    #[error("snapshot for {risk_file_id} contains {record_id} belonging to {found}")]
    SnapshotMismatch {
        risk_file_id: String,
        record_id: String,
        found: String,
    },

    #[error("computation failed for {risk_file_id}: {reason}")]
    ComputationFailed { risk_file_id: String, reason: String },

    #[error("worker channel closed")]
    Closed,
}

impl ErrorCode for WorkerError {
    fn error_code(&self) -> &'static str {
        match self {
            WorkerError::Closed => error_code::WORKER_CLOSED,
            _ => error_code::WORKER_ERROR,
        }
    }
}
