use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::records::Scenario;

use super::{Quality, QualityCounts};

/// One field aggregated across expert submissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregatedValue {
    /// Scale position in [0, 5]. Zero when `quality` is `Zero`.
    pub value: f64,
    pub quality: Quality,
    /// Number of usable submissions behind the value.
    pub submissions: usize,
}

impl AggregatedValue {
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            quality: Quality::Zero,
            submissions: 0,
        }
    }
}

/// Aggregated estimates for one scenario of a risk file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioAggregate {
    pub scenario: Scenario,
    pub quality: Quality,
    pub probability: AggregatedValue,
    pub human: AggregatedValue,
    pub societal: AggregatedValue,
    pub environmental: AggregatedValue,
    pub financial: AggregatedValue,
    pub climate_change: AggregatedValue,
    /// Weighted mean of the four impact dimensions, in [0, 5].
    pub total_impact: f64,
}

/// Scale positions of the codes stored on the risk file itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioLevels {
    pub scenario: Scenario,
    pub probability: f64,
    pub human: f64,
    pub societal: f64,
    pub environmental: f64,
    pub financial: f64,
    pub climate_change: f64,
    pub total_impact: f64,
}

/// One cell of an aggregated cascade matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeCell {
    pub cause_scenario: Scenario,
    pub effect_scenario: Scenario,
    pub value: AggregatedValue,
}

/// Aggregated cause → effect edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeAggregate {
    pub cause_id: String,
    pub effect_id: String,
    pub quality: Quality,
    /// Highest aggregated cell, in [0, 5].
    pub probability: f64,
    pub submissions: usize,
    pub cells: Vec<CascadeCell>,
}

impl CascadeAggregate {
    pub fn cell(&self, cause: Scenario, effect: Scenario) -> Option<&CascadeCell> {
        self.cells
            .iter()
            .find(|c| c.cause_scenario == cause && c.effect_scenario == effect)
    }
}

/// Computed aggregate per risk file. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisData {
    pub risk_file_id: String,
    /// False for the placeholder shown when computation failed.
    pub available: bool,
    /// Direct analyses that referenced this risk file.
    pub submissions: usize,
    pub quality_counts: QualityCounts,
    pub scenarios: Vec<ScenarioAggregate>,
    pub risk_file_levels: Vec<ScenarioLevels>,
    pub causes: Vec<CascadeAggregate>,
    pub computed_at: DateTime<Utc>,
}

impl AnalysisData {
    /// Placeholder for a "data unavailable" state.
    pub fn unavailable(risk_file_id: impl Into<String>) -> Self {
        Self {
            risk_file_id: risk_file_id.into(),
            available: false,
            submissions: 0,
            quality_counts: QualityCounts::default(),
            scenarios: Vec::new(),
            risk_file_levels: Vec::new(),
            causes: Vec::new(),
            computed_at: Utc::now(),
        }
    }

    /// Overall quality across the three scenarios.
    pub fn overall_quality(&self) -> Quality {
        Quality::combine(self.scenarios.iter().map(|s| s.quality))
    }

    pub fn scenario(&self, scenario: Scenario) -> Option<&ScenarioAggregate> {
        self.scenarios.iter().find(|s| s.scenario == scenario)
    }

    pub fn risk_file_level(&self, scenario: Scenario) -> Option<&ScenarioLevels> {
        self.risk_file_levels.iter().find(|s| s.scenario == scenario)
    }

    pub fn cause(&self, cause_id: &str) -> Option<&CascadeAggregate> {
        self.causes.iter().find(|c| c.cause_id == cause_id)
    }
}
