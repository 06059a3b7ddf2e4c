use std::collections::BTreeMap;

use riskq_core::config::AggregationConfig;
use riskq_core::models::{CascadeAggregate, CascadeCell, Quality};
use riskq_core::records::{CascadeAnalysis, Scenario};
use riskq_scales::{level_for, ScaleKind};

use crate::classify::aggregate_values;

/// Aggregate the cascade analyses pointing at `effect_id`, one edge per
/// cause. Edges come back sorted by cause id.
pub fn aggregate_edges(
    config: &AggregationConfig,
    effect_id: &str,
    analyses: &[CascadeAnalysis],
) -> Vec<CascadeAggregate> {
    let mut by_cause: BTreeMap<&str, Vec<&CascadeAnalysis>> = BTreeMap::new();
    for analysis in analyses.iter().filter(|a| a.effect_id == effect_id) {
        by_cause
            .entry(analysis.cause_id.as_str())
            .or_default()
            .push(analysis);
    }

    by_cause
        .into_iter()
        .map(|(cause_id, group)| aggregate_edge(config, cause_id, effect_id, &group))
        .collect()
}

/// Aggregate one cause → effect edge.
pub fn aggregate_edge(
    config: &AggregationConfig,
    cause_id: &str,
    effect_id: &str,
    group: &[&CascadeAnalysis],
) -> CascadeAggregate {
    let mut cells = Vec::with_capacity(9);
    for cause in Scenario::ALL {
        for effect in Scenario::ALL {
            let values: Vec<f64> = group
                .iter()
                .filter_map(|a| a.matrix.get(cause, effect))
                .filter_map(|code| level_for(ScaleKind::ConditionalProbability, code))
                .collect();
            cells.push(CascadeCell {
                cause_scenario: cause,
                effect_scenario: effect,
                value: aggregate_values(&values, config.consensus_tolerance),
            });
        }
    }

    let quality = Quality::combine(cells.iter().map(|c| c.value.quality));
    let probability = cells
        .iter()
        .map(|c| c.value.value)
        .fold(0.0_f64, f64::max);

    CascadeAggregate {
        cause_id: cause_id.to_string(),
        effect_id: effect_id.to_string(),
        quality,
        probability,
        submissions: group.len(),
        cells,
    }
}
