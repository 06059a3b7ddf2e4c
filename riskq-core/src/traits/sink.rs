use crate::errors::StoreError;

/// Where a debounced form field is persisted.
pub trait IFieldSink: Send + Sync {
    /// Persist one field. `None` clears it.
    fn persist(&self, field: &str, value: Option<&str>) -> Result<(), StoreError>;
}
