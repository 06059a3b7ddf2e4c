use crate::models::AnalysisData;
use crate::records::{CascadeAnalysis, DirectAnalysis, RiskFile};

/// Turns raw expert submissions into a risk file's aggregate.
/// Implementations are pure: same inputs, same output, no shared state.
pub trait IAggregator: Send + Sync {
    fn aggregate(
        &self,
        risk_file: &RiskFile,
        direct: &[DirectAnalysis],
        cascades: &[CascadeAnalysis],
    ) -> AnalysisData;
}
