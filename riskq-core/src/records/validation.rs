use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RecordError;
use crate::traits::Record;

use super::normalize;
use super::risk_file::unknown;

/// Structural sections of a risk file an expert can comment on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationSection {
    Definition,
    HistoricalEvents,
    IntensityParameters,
    Scenarios,
}

impl ValidationSection {
    pub const ALL: [ValidationSection; 4] = [
        ValidationSection::Definition,
        ValidationSection::HistoricalEvents,
        ValidationSection::IntensityParameters,
        ValidationSection::Scenarios,
    ];

    pub fn field_key(self) -> &'static str {
        match self {
            ValidationSection::Definition => "definition_feedback",
            ValidationSection::HistoricalEvents => "historical_events_feedback",
            ValidationSection::IntensityParameters => "intensity_parameters_feedback",
            ValidationSection::Scenarios => "scenarios_feedback",
        }
    }

    pub fn from_field_key(key: &str) -> Option<Self> {
        ValidationSection::ALL
            .into_iter()
            .find(|s| s.field_key() == key)
    }
}

/// Expert feedback on a risk file's structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Validation {
    pub id: String,
    pub expert_id: String,
    pub risk_file_id: String,
    pub definition_feedback: Option<String>,
    pub historical_events_feedback: Option<String>,
    pub intensity_parameters_feedback: Option<String>,
    pub scenarios_feedback: Option<String>,
}

impl Validation {
    pub fn new(
        id: impl Into<String>,
        expert_id: impl Into<String>,
        risk_file_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            expert_id: expert_id.into(),
            risk_file_id: risk_file_id.into(),
            definition_feedback: None,
            historical_events_feedback: None,
            intensity_parameters_feedback: None,
            scenarios_feedback: None,
        }
    }

    pub fn feedback(&self, section: ValidationSection) -> Option<&str> {
        match section {
            ValidationSection::Definition => self.definition_feedback.as_deref(),
            ValidationSection::HistoricalEvents => self.historical_events_feedback.as_deref(),
            ValidationSection::IntensityParameters => {
                self.intensity_parameters_feedback.as_deref()
            }
            ValidationSection::Scenarios => self.scenarios_feedback.as_deref(),
        }
    }

    fn feedback_mut(&mut self, section: ValidationSection) -> &mut Option<String> {
        match section {
            ValidationSection::Definition => &mut self.definition_feedback,
            ValidationSection::HistoricalEvents => &mut self.historical_events_feedback,
            ValidationSection::IntensityParameters => &mut self.intensity_parameters_feedback,
            ValidationSection::Scenarios => &mut self.scenarios_feedback,
        }
    }
}

impl Record for Validation {
    const ENTITY: &'static str = "validation";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Result<Option<&str>, RecordError> {
        let section =
            ValidationSection::from_field_key(key).ok_or_else(|| unknown(Self::ENTITY, key))?;
        Ok(self.feedback(section))
    }

    fn set_field(&mut self, key: &str, value: Option<String>) -> Result<(), RecordError> {
        let section =
            ValidationSection::from_field_key(key).ok_or_else(|| unknown(Self::ENTITY, key))?;
        *self.feedback_mut(section) = normalize(value);
        Ok(())
    }
}
