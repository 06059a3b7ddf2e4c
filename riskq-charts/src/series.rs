use serde::{Deserialize, Serialize};
use ts_rs::TS;

use riskq_core::models::{AggregatedValue, AnalysisData, Quality, ScenarioAggregate};
use riskq_core::records::{ImpactDimension, Scenario};

/// One labelled point of a bar or radar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub quality: Quality,
}

/// Probability/impact position of one scenario, for the risk matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioPoint {
    pub scenario: Scenario,
    pub probability: f64,
    pub impact: f64,
    pub quality: Quality,
}

fn dimension_value(aggregate: &ScenarioAggregate, dimension: ImpactDimension) -> AggregatedValue {
    match dimension {
        ImpactDimension::Human => aggregate.human,
        ImpactDimension::Societal => aggregate.societal,
        ImpactDimension::Environmental => aggregate.environmental,
        ImpactDimension::Financial => aggregate.financial,
    }
}

/// One point per impact dimension, in display order.
pub fn impact_series(aggregate: &ScenarioAggregate) -> Vec<SeriesPoint> {
    ImpactDimension::ALL
        .into_iter()
        .map(|dimension| {
            let value = dimension_value(aggregate, dimension);
            SeriesPoint {
                label: dimension.label().to_string(),
                value: value.value,
                quality: value.quality,
            }
        })
        .collect()
}

/// One point per scenario present in the aggregate.
pub fn scenario_series(data: &AnalysisData) -> Vec<ScenarioPoint> {
    Scenario::ALL
        .into_iter()
        .filter_map(|s| data.scenario(s))
        .map(|agg| ScenarioPoint {
            scenario: agg.scenario,
            probability: agg.probability.value,
            impact: agg.total_impact,
            quality: agg.quality,
        })
        .collect()
}

/// One point per cause, most likely first. Ties keep cause-id order.
pub fn cascade_series(data: &AnalysisData) -> Vec<SeriesPoint> {
    let mut causes: Vec<_> = data.causes.iter().collect();
    causes.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| a.cause_id.cmp(&b.cause_id))
    });
    causes
        .into_iter()
        .map(|c| SeriesPoint {
            label: c.cause_id.clone(),
            value: c.probability,
            quality: c.quality,
        })
        .collect()
}
