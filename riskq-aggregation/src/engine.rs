use chrono::Utc;
use tracing::{debug, info, instrument};

use riskq_core::config::AggregationConfig;
use riskq_core::models::{AnalysisData, CascadeAggregate, QualityCounts};
use riskq_core::records::{CascadeAnalysis, DirectAnalysis, RiskFile, Scenario};
use riskq_core::traits::IAggregator;

use crate::{cascade, direct};

/// Aggregation engine. Stateless apart from its config: every call
/// recomputes from the submissions it is given.
pub struct AggregationEngine {
    config: AggregationConfig,
}

impl AggregationEngine {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Aggregate the direct analyses of one risk file. Analyses that
    /// reference another risk file are skipped.
    #[instrument(skip_all, fields(risk_file_id = %risk_file.id))]
    pub fn aggregate_direct(&self, risk_file: &RiskFile, analyses: &[DirectAnalysis]) -> AnalysisData {
        let relevant: Vec<&DirectAnalysis> = analyses
            .iter()
            .filter(|a| a.risk_file_id == risk_file.id)
            .collect();
        if relevant.len() < analyses.len() {
            debug!(
                skipped = analyses.len() - relevant.len(),
                "ignoring analyses for other risk files"
            );
        }

        let scenarios: Vec<_> = Scenario::ALL
            .into_iter()
            .map(|s| direct::aggregate_scenario(&self.config, &relevant, s))
            .collect();

        let mut quality_counts = QualityCounts::default();
        for s in &scenarios {
            for value in [
                &s.probability,
                &s.human,
                &s.societal,
                &s.environmental,
                &s.financial,
                &s.climate_change,
            ] {
                quality_counts.record(value.quality);
            }
        }

        AnalysisData {
            risk_file_id: risk_file.id.clone(),
            available: true,
            submissions: relevant.len(),
            quality_counts,
            scenarios,
            risk_file_levels: direct::risk_file_levels(&self.config, risk_file),
            causes: Vec::new(),
            computed_at: Utc::now(),
        }
    }

    /// Aggregate the cascade analyses whose effect is `effect_id`.
    pub fn aggregate_cascades(
        &self,
        effect_id: &str,
        analyses: &[CascadeAnalysis],
    ) -> Vec<CascadeAggregate> {
        cascade::aggregate_edges(&self.config, effect_id, analyses)
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new(AggregationConfig::default())
    }
}

impl IAggregator for AggregationEngine {
    fn aggregate(
        &self,
        risk_file: &RiskFile,
        direct: &[DirectAnalysis],
        cascades: &[CascadeAnalysis],
    ) -> AnalysisData {
        let _span = riskq_core::aggregation_span!(risk_file.id, direct.len()).entered();

        let mut data = self.aggregate_direct(risk_file, direct);
        data.causes = self.aggregate_cascades(&risk_file.id, cascades);

        info!(
            submissions = data.submissions,
            consensus = data.quality_counts.consensus,
            average = data.quality_counts.average,
            zero = data.quality_counts.zero,
            causes = data.causes.len(),
            "aggregation complete"
        );
        data
    }
}
