//! InMemoryStore: reference store over concurrent maps.
//!
//! Used by tests and local tooling in place of the remote service. The
//! store can be switched offline to exercise failure paths: every call
//! then fails with `StoreError::Unavailable`.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use riskq_core::errors::StoreError;
use riskq_core::records::{CascadeAnalysis, DirectAnalysis, RiskFile, Validation};
use riskq_core::traits::IRiskDataStore;

use crate::table::Table;

pub struct InMemoryStore {
    risk_files: Table<RiskFile>,
    direct: Table<DirectAnalysis>,
    cascades: Table<CascadeAnalysis>,
    validations: Table<Validation>,
    offline: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            risk_files: Table::new(),
            direct: Table::new(),
            cascades: Table::new(),
            validations: Table::new(),
            offline: AtomicBool::new(false),
        }
    }

    /// Simulate losing (or regaining) the connection to the store.
    pub fn set_offline(&self, offline: bool) {
        debug!(offline, "in-memory store availability changed");
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    /// Total number of records of every kind.
    pub fn record_count(&self) -> usize {
        self.risk_files.len() + self.direct.len() + self.cascades.len() + self.validations.len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.is_offline() {
            return Err(StoreError::Unavailable {
                reason: "in-memory store is offline".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IRiskDataStore for InMemoryStore {
    fn get_risk_file(&self, id: &str) -> Result<RiskFile, StoreError> {
        self.check()?;
        self.risk_files.get(id)
    }

    fn list_risk_files(&self) -> Result<Vec<RiskFile>, StoreError> {
        self.check()?;
        Ok(self.risk_files.list_by(|_| true))
    }

    fn upsert_risk_file(&self, risk_file: &RiskFile) -> Result<(), StoreError> {
        self.check()?;
        self.risk_files.upsert(risk_file);
        Ok(())
    }

    fn update_risk_file_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        self.check()?;
        self.risk_files.update_field(id, field, value)
    }

    fn get_direct_analysis(&self, id: &str) -> Result<DirectAnalysis, StoreError> {
        self.check()?;
        self.direct.get(id)
    }

    fn list_direct_analyses(&self, risk_file_id: &str) -> Result<Vec<DirectAnalysis>, StoreError> {
        self.check()?;
        Ok(self.direct.list_by(|a| a.risk_file_id == risk_file_id))
    }

    fn upsert_direct_analysis(&self, analysis: &DirectAnalysis) -> Result<(), StoreError> {
        self.check()?;
        self.direct.upsert(analysis);
        Ok(())
    }

    fn update_direct_analysis_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        self.check()?;
        self.direct.update_field(id, field, value)
    }

    fn delete_direct_analysis(&self, id: &str) -> Result<(), StoreError> {
        self.check()?;
        self.direct.delete(id)
    }

    fn get_cascade_analysis(&self, id: &str) -> Result<CascadeAnalysis, StoreError> {
        self.check()?;
        self.cascades.get(id)
    }

    fn list_cascade_analyses(&self, effect_id: &str) -> Result<Vec<CascadeAnalysis>, StoreError> {
        self.check()?;
        Ok(self.cascades.list_by(|c| c.effect_id == effect_id))
    }

    fn upsert_cascade_analysis(&self, analysis: &CascadeAnalysis) -> Result<(), StoreError> {
        self.check()?;
        self.cascades.upsert(analysis);
        Ok(())
    }

    fn update_cascade_analysis_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        self.check()?;
        self.cascades.update_field(id, field, value)
    }

    fn delete_cascade_analysis(&self, id: &str) -> Result<(), StoreError> {
        self.check()?;
        self.cascades.delete(id)
    }

    fn get_validation(&self, id: &str) -> Result<Validation, StoreError> {
        self.check()?;
        self.validations.get(id)
    }

    fn list_validations(&self, risk_file_id: &str) -> Result<Vec<Validation>, StoreError> {
        self.check()?;
        Ok(self.validations.list_by(|v| v.risk_file_id == risk_file_id))
    }

    fn upsert_validation(&self, validation: &Validation) -> Result<(), StoreError> {
        self.check()?;
        self.validations.upsert(validation);
        Ok(())
    }

    fn update_validation_field(
        &self,
        id: &str,
        field: &str,
        value: Option<String>,
    ) -> Result<(), StoreError> {
        self.check()?;
        self.validations.update_field(id, field, value)
    }
}
