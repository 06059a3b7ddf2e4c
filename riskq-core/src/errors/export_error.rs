use super::error_code::{self, ErrorCode};

/// Report export and file import errors.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}: {message}")]
    Parse { name: String, message: String },

    #[error("failed to render report: {message}")]
    Render { message: String },
}

impl ErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
