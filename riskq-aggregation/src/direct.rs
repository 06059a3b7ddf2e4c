use riskq_core::config::AggregationConfig;
use riskq_core::models::{AggregatedValue, Quality, ScenarioAggregate, ScenarioLevels};
use riskq_core::records::{CodeField, DirectAnalysis, RiskFile, Scenario, ScenarioCodes};
use riskq_scales::{kind_for_field, level_for, to_numeric_for};

use crate::classify::aggregate_values;

/// Usable submissions for one field of one scenario. Null codes and codes
/// that miss the field's scale are left out.
pub fn field_values(analyses: &[&DirectAnalysis], scenario: Scenario, field: CodeField) -> Vec<f64> {
    let kind = kind_for_field(field);
    analyses
        .iter()
        .filter_map(|a| a.scenarios.get(scenario).get(field))
        .filter_map(|code| level_for(kind, code))
        .collect()
}

/// Weighted mean of the four impact dimensions.
pub fn total_impact(
    config: &AggregationConfig,
    human: f64,
    societal: f64,
    environmental: f64,
    financial: f64,
) -> f64 {
    let total_weight = config.total_weight();
    if total_weight <= 0.0 {
        return 0.0;
    }
    (human * config.human_weight
        + societal * config.societal_weight
        + environmental * config.environmental_weight
        + financial * config.financial_weight)
        / total_weight
}

/// Aggregate one scenario across the given analyses.
pub fn aggregate_scenario(
    config: &AggregationConfig,
    analyses: &[&DirectAnalysis],
    scenario: Scenario,
) -> ScenarioAggregate {
    let field = |f: CodeField| -> AggregatedValue {
        aggregate_values(
            &field_values(analyses, scenario, f),
            config.consensus_tolerance,
        )
    };

    let probability = field(CodeField::DirectProbability);
    let human = field(CodeField::Human);
    let societal = field(CodeField::Societal);
    let environmental = field(CodeField::Environmental);
    let financial = field(CodeField::Financial);
    let climate_change = field(CodeField::ClimateChange);

    let quality = Quality::combine(
        [
            &probability,
            &human,
            &societal,
            &environmental,
            &financial,
            &climate_change,
        ]
        .map(|v| v.quality),
    );

    ScenarioAggregate {
        scenario,
        quality,
        total_impact: total_impact(
            config,
            human.value,
            societal.value,
            environmental.value,
            financial.value,
        ),
        probability,
        human,
        societal,
        environmental,
        financial,
        climate_change,
    }
}

/// Scale positions of the codes stored on the risk file itself.
pub fn risk_file_levels(config: &AggregationConfig, risk_file: &RiskFile) -> Vec<ScenarioLevels> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| levels(config, scenario, risk_file.scenario(scenario)))
        .collect()
}

fn levels(config: &AggregationConfig, scenario: Scenario, codes: &ScenarioCodes) -> ScenarioLevels {
    let numeric = |f: CodeField| to_numeric_for(kind_for_field(f), codes.get(f));
    let human = numeric(CodeField::Human);
    let societal = numeric(CodeField::Societal);
    let environmental = numeric(CodeField::Environmental);
    let financial = numeric(CodeField::Financial);
    ScenarioLevels {
        scenario,
        probability: numeric(CodeField::DirectProbability),
        human,
        societal,
        environmental,
        financial,
        climate_change: numeric(CodeField::ClimateChange),
        total_impact: total_impact(config, human, societal, environmental, financial),
    }
}
