use crate::errors::RecordError;

/// A persisted record addressable one field at a time.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    fn id(&self) -> &str;

    /// Read a field by its form key.
    fn field(&self, key: &str) -> Result<Option<&str>, RecordError>;

    /// Write a field by its form key. Blank values clear the field.
    fn set_field(&mut self, key: &str, value: Option<String>) -> Result<(), RecordError>;
}
