use riskq_core::errors::WorkerError;
use riskq_core::records::{CascadeAnalysis, DirectAnalysis, RiskFile};

/// Owned snapshot of everything one aggregation needs.
#[derive(Debug, Clone)]
pub struct ComputeRequest {
    pub risk_file: RiskFile,
    pub analyses: Vec<DirectAnalysis>,
    /// Cascade analyses whose effect is `risk_file`.
    pub cascades: Vec<CascadeAnalysis>,
}

impl ComputeRequest {
    pub fn new(
        risk_file: RiskFile,
        analyses: Vec<DirectAnalysis>,
        cascades: Vec<CascadeAnalysis>,
    ) -> Self {
        Self {
            risk_file,
            analyses,
            cascades,
        }
    }

    pub fn risk_file_id(&self) -> &str {
        &self.risk_file.id
    }

    /// Every analysis must point at the snapshot's risk file.
    pub fn validate(&self) -> Result<(), WorkerError> {
        let id = &self.risk_file.id;
        if let Some(a) = self.analyses.iter().find(|a| &a.risk_file_id != id) {
            return Err(WorkerError::SnapshotMismatch {
                risk_file_id: id.clone(),
                record_id: a.id.clone(),
                found: a.risk_file_id.clone(),
            });
        }
        if let Some(c) = self.cascades.iter().find(|c| &c.effect_id != id) {
            return Err(WorkerError::SnapshotMismatch {
                risk_file_id: id.clone(),
                record_id: c.id.clone(),
                found: c.effect_id.clone(),
            });
        }
        Ok(())
    }
}
