use crate::errors::StoreError;
use crate::records::{CascadeAnalysis, DirectAnalysis, RiskFile, Validation};

/// CRUD over the remote data store. The store is the source of truth;
/// everything held locally is a cache of it.
pub trait IRiskDataStore: Send + Sync {
    // --- Risk files ---
    fn get_risk_file(&self, id: &str) -> Result<RiskFile, StoreError>;
    fn list_risk_files(&self) -> Result<Vec<RiskFile>, StoreError>;
    fn upsert_risk_file(&self, risk_file: &RiskFile) -> Result<(), StoreError>;
    fn update_risk_file_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError>;

    // --- Direct analyses ---
    fn get_direct_analysis(&self, id: &str) -> Result<DirectAnalysis, StoreError>;
    fn list_direct_analyses(&self, risk_file_id: &str) -> Result<Vec<DirectAnalysis>, StoreError>;
    fn upsert_direct_analysis(&self, analysis: &DirectAnalysis) -> Result<(), StoreError>;
    fn update_direct_analysis_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError>;
    fn delete_direct_analysis(&self, id: &str) -> Result<(), StoreError>;

    // --- Cascade analyses ---
    fn get_cascade_analysis(&self, id: &str) -> Result<CascadeAnalysis, StoreError>;
    /// Cascade analyses whose effect is the given risk file.
    fn list_cascade_analyses(&self, effect_id: &str) -> Result<Vec<CascadeAnalysis>, StoreError>;
    fn upsert_cascade_analysis(&self, analysis: &CascadeAnalysis) -> Result<(), StoreError>;
    fn update_cascade_analysis_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError>;
    fn delete_cascade_analysis(&self, id: &str) -> Result<(), StoreError>;

    // --- Validations ---
    fn get_validation(&self, id: &str) -> Result<Validation, StoreError>;
    fn list_validations(&self, risk_file_id: &str) -> Result<Vec<Validation>, StoreError>;
    fn upsert_validation(&self, validation: &Validation) -> Result<(), StoreError>;
    fn update_validation_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError>;
}
