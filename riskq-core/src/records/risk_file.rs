use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RecordError;
use crate::traits::Record;

use super::{normalize, Scenario, ScenarioCodes, ScenarioSet};

/// How a hazard comes about. Drives which wizard flow applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    Standard,
    Malicious,
    Emerging,
}

impl RiskType {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskType::Standard => "standard",
            RiskType::Malicious => "malicious",
            RiskType::Emerging => "emerging",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Cyber,
    Ecotech,
    Health,
    ManMade,
    Nature,
    Transversal,
    EmergingRisk,
}

impl RiskCategory {
    pub fn label(self) -> &'static str {
        match self {
            RiskCategory::Cyber => "Cyber",
            RiskCategory::Ecotech => "Ecotech",
            RiskCategory::Health => "Health",
            RiskCategory::ManMade => "Man-made",
            RiskCategory::Nature => "Nature",
            RiskCategory::Transversal => "Transversal",
            RiskCategory::EmergingRisk => "Emerging risk",
        }
    }
}

/// A hazard definition under assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFile {
    pub id: String,
    pub title: String,
    pub risk_type: RiskType,
    pub category: RiskCategory,
    pub definition: Option<String>,
    pub scenarios: ScenarioSet,
}

impl RiskFile {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        risk_type: RiskType,
        category: RiskCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            risk_type,
            category,
            definition: None,
            scenarios: ScenarioSet::default(),
        }
    }

    pub fn scenario(&self, scenario: Scenario) -> &ScenarioCodes {
        self.scenarios.get(scenario)
    }
}

impl Record for RiskFile {
    const ENTITY: &'static str = "risk_file";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Result<Option<&str>, RecordError> {
        match key {
            "title" => Ok(Some(self.title.as_str())),
            "definition" => Ok(self.definition.as_deref()),
            _ => self
                .scenarios
                .field(key)
                .ok_or_else(|| unknown(Self::ENTITY, key)),
        }
    }

    fn set_field(&mut self, key: &str, value: Option<String>) -> Result<(), RecordError> {
        match key {
            "title" => {
                self.title = normalize(value).ok_or_else(|| RecordError::InvalidValue {
                    field: key.to_string(),
                    reason: "title cannot be empty".to_string(),
                })?;
                Ok(())
            }
            "definition" => {
                self.definition = normalize(value);
                Ok(())
            }
            _ => self.scenarios.set_field(Self::ENTITY, key, value),
        }
    }
}

pub(crate) fn unknown(entity: &'static str, key: &str) -> RecordError {
    RecordError::UnknownField {
        entity,
        field: key.to_string(),
    }
}
