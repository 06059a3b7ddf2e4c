use super::error_code::{self, ErrorCode};

/// Remote data store errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("save rejected for {entity} {id}: {reason}")]
    Rejected {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => error_code::NOT_FOUND,
            _ => error_code::STORE_ERROR,
        }
    }
}
