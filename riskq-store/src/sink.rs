use std::sync::Arc;

use riskq_core::errors::StoreError;
use riskq_core::traits::{IFieldSink, IRiskDataStore};

/// The record a sink writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    RiskFile(String),
    DirectAnalysis(String),
    CascadeAnalysis(String),
    /// One sink for a whole cascade step: field keys take the form
    /// `"<cascade analysis id>:<field>"`.
    CascadeAnalyses,
    Validation(String),
}

/// Persists debounced form fields into one record of a store.
pub struct StoreFieldSink {
    store: Arc<dyn IRiskDataStore>,
    target: SinkTarget,
}

impl StoreFieldSink {
    pub fn new(store: Arc<dyn IRiskDataStore>, target: SinkTarget) -> Self {
        Self { store, target }
    }

    pub fn target(&self) -> &SinkTarget {
        &self.target
    }

    /// Field key for one cascade analysis under [`SinkTarget::CascadeAnalyses`].
    pub fn cascade_key(analysis_id: &str, field: &str) -> String {
        format!("{analysis_id}:{field}")
    }
}

impl IFieldSink for StoreFieldSink {
    fn persist(&self, field: &str, value: Option<&str>) -> Result<(), StoreError> {
        let value = value.map(str::to_string);
        match &self.target {
            SinkTarget::RiskFile(id) => self.store.update_risk_file_field(id, field, value),
            SinkTarget::DirectAnalysis(id) => {
                self.store.update_direct_analysis_field(id, field, value)
            }
            SinkTarget::CascadeAnalysis(id) => {
                self.store.update_cascade_analysis_field(id, field, value)
            }
            SinkTarget::CascadeAnalyses => {
                let (id, field) = field.split_once(':').ok_or_else(|| StoreError::Rejected {
                    entity: "cascade_analysis",
                    id: String::new(),
                    reason: format!("field key {field:?} does not name a cascade analysis"),
                })?;
                self.store.update_cascade_analysis_field(id, field, value)
            }
            SinkTarget::Validation(id) => self.store.update_validation_field(id, field, value),
        }
    }
}
