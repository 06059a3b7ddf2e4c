//! ErrorCode trait for surfacing structured codes to the presentation layer.

/// Every error enum implements this to provide a stable code string the
/// UI can key its inline notices on.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "STORE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted notice string: `[ERROR_CODE] message`.
    fn notice(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORE_ERROR: &str = "STORE_ERROR";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const RECORD_ERROR: &str = "RECORD_ERROR";
pub const WORKER_ERROR: &str = "WORKER_ERROR";
pub const WORKER_CLOSED: &str = "WORKER_CLOSED";
pub const WIZARD_ERROR: &str = "WIZARD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
