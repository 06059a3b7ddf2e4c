use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RecordError;
use crate::traits::Record;

use super::risk_file::unknown;
use super::{normalize, split_scenario_key, Scenario, ScenarioSet};

/// Free-text justification per scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioQuali {
    pub considerable: Option<String>,
    pub major: Option<String>,
    pub extreme: Option<String>,
}

impl ScenarioQuali {
    pub fn get(&self, scenario: Scenario) -> Option<&str> {
        match scenario {
            Scenario::Considerable => self.considerable.as_deref(),
            Scenario::Major => self.major.as_deref(),
            Scenario::Extreme => self.extreme.as_deref(),
        }
    }

    pub fn set(&mut self, scenario: Scenario, value: Option<String>) {
        let slot = match scenario {
            Scenario::Considerable => &mut self.considerable,
            Scenario::Major => &mut self.major,
            Scenario::Extreme => &mut self.extreme,
        };
        *slot = normalize(value);
    }
}

/// One expert's estimate of a risk file's own scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DirectAnalysis {
    pub id: String,
    pub expert_id: String,
    pub risk_file_id: String,
    pub scenarios: ScenarioSet,
    pub quali: ScenarioQuali,
    pub quali_climate_change: Option<String>,
}

impl DirectAnalysis {
    /// A new, empty submission with a generated id.
    pub fn start(expert_id: impl Into<String>, risk_file_id: impl Into<String>) -> Self {
        Self::new(super::new_id(), expert_id, risk_file_id)
    }

    pub fn new(
        id: impl Into<String>,
        expert_id: impl Into<String>,
        risk_file_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            expert_id: expert_id.into(),
            risk_file_id: risk_file_id.into(),
            scenarios: ScenarioSet::default(),
            quali: ScenarioQuali::default(),
            quali_climate_change: None,
        }
    }
}

impl Record for DirectAnalysis {
    const ENTITY: &'static str = "direct_analysis";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Result<Option<&str>, RecordError> {
        if key == "quali_climate_change" {
            return Ok(self.quali_climate_change.as_deref());
        }
        if let Some(("quali", scenario)) = split_scenario_key(key) {
            return Ok(self.quali.get(scenario));
        }
        self.scenarios
            .field(key)
            .ok_or_else(|| unknown(Self::ENTITY, key))
    }

    fn set_field(&mut self, key: &str, value: Option<String>) -> Result<(), RecordError> {
        if key == "quali_climate_change" {
            self.quali_climate_change = normalize(value);
            return Ok(());
        }
        if let Some(("quali", scenario)) = split_scenario_key(key) {
            self.quali.set(scenario, value);
            return Ok(());
        }
        self.scenarios.set_field(Self::ENTITY, key, value)
    }
}
