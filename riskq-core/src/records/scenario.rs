use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RecordError;

use super::{normalize, split_scenario_key};

/// Scenario severity. Every risk file is assessed under all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Considerable,
    Major,
    Extreme,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Considerable, Scenario::Major, Scenario::Extreme];

    /// Suffix used in field keys (`h_c`, `dp_m`, `cc_e`).
    pub fn suffix(self) -> &'static str {
        match self {
            Scenario::Considerable => "c",
            Scenario::Major => "m",
            Scenario::Extreme => "e",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "c" => Some(Scenario::Considerable),
            "m" => Some(Scenario::Major),
            "e" => Some(Scenario::Extreme),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scenario::Considerable => "Considerable",
            Scenario::Major => "Major",
            Scenario::Extreme => "Extreme",
        }
    }
}

/// Impact dimensions assessed per scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ImpactDimension {
    Human,
    Societal,
    Environmental,
    Financial,
}

impl ImpactDimension {
    pub const ALL: [ImpactDimension; 4] = [
        ImpactDimension::Human,
        ImpactDimension::Societal,
        ImpactDimension::Environmental,
        ImpactDimension::Financial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImpactDimension::Human => "Human",
            ImpactDimension::Societal => "Societal",
            ImpactDimension::Environmental => "Environmental",
            ImpactDimension::Financial => "Financial",
        }
    }

    /// The coded field holding this dimension's level.
    pub fn field(self) -> CodeField {
        match self {
            ImpactDimension::Human => CodeField::Human,
            ImpactDimension::Societal => CodeField::Societal,
            ImpactDimension::Environmental => CodeField::Environmental,
            ImpactDimension::Financial => CodeField::Financial,
        }
    }
}

/// The coded fields carried by every scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CodeField {
    DirectProbability,
    Human,
    Societal,
    Environmental,
    Financial,
    ClimateChange,
}

impl CodeField {
    pub const ALL: [CodeField; 6] = [
        CodeField::DirectProbability,
        CodeField::Human,
        CodeField::Societal,
        CodeField::Environmental,
        CodeField::Financial,
        CodeField::ClimateChange,
    ];

    /// Base of the field key, before the scenario suffix.
    pub fn key(self) -> &'static str {
        match self {
            CodeField::DirectProbability => "dp",
            CodeField::Human => "h",
            CodeField::Societal => "s",
            CodeField::Environmental => "e",
            CodeField::Financial => "f",
            CodeField::ClimateChange => "cc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeField::DirectProbability => "Probability",
            CodeField::Human => "Human impact",
            CodeField::Societal => "Societal impact",
            CodeField::Environmental => "Environmental impact",
            CodeField::Financial => "Financial impact",
            CodeField::ClimateChange => "Climate change",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        CodeField::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Full field key for one scenario, e.g. `h_c`.
    pub fn scenario_key(self, scenario: Scenario) -> String {
        format!("{}_{}", self.key(), scenario.suffix())
    }
}

/// Coded values for one scenario. Every value is a nullable ordinal code
/// such as `DP3` or `HA2`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioCodes {
    /// Direct probability.
    pub dp: Option<String>,
    /// Human impact.
    pub h: Option<String>,
    /// Societal impact.
    pub s: Option<String>,
    /// Environmental impact.
    pub e: Option<String>,
    /// Financial impact.
    pub f: Option<String>,
    /// Direct probability under the 2050 climate projection.
    pub cc: Option<String>,
}

impl ScenarioCodes {
    pub fn get(&self, field: CodeField) -> Option<&str> {
        match field {
            CodeField::DirectProbability => self.dp.as_deref(),
            CodeField::Human => self.h.as_deref(),
            CodeField::Societal => self.s.as_deref(),
            CodeField::Environmental => self.e.as_deref(),
            CodeField::Financial => self.f.as_deref(),
            CodeField::ClimateChange => self.cc.as_deref(),
        }
    }

    pub fn set(&mut self, field: CodeField, value: Option<String>) {
        let slot = match field {
            CodeField::DirectProbability => &mut self.dp,
            CodeField::Human => &mut self.h,
            CodeField::Societal => &mut self.s,
            CodeField::Environmental => &mut self.e,
            CodeField::Financial => &mut self.f,
            CodeField::ClimateChange => &mut self.cc,
        };
        *slot = normalize(value);
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        CodeField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// The three scenarios of a risk file or direct analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScenarioSet {
    pub considerable: ScenarioCodes,
    pub major: ScenarioCodes,
    pub extreme: ScenarioCodes,
}

impl ScenarioSet {
    pub fn get(&self, scenario: Scenario) -> &ScenarioCodes {
        match scenario {
            Scenario::Considerable => &self.considerable,
            Scenario::Major => &self.major,
            Scenario::Extreme => &self.extreme,
        }
    }

    pub fn get_mut(&mut self, scenario: Scenario) -> &mut ScenarioCodes {
        match scenario {
            Scenario::Considerable => &mut self.considerable,
            Scenario::Major => &mut self.major,
            Scenario::Extreme => &mut self.extreme,
        }
    }

    /// Resolve a coded field key such as `h_c`. `None` when the key does
    /// not address a coded field.
    pub(crate) fn resolve(key: &str) -> Option<(CodeField, Scenario)> {
        let (base, scenario) = split_scenario_key(key)?;
        Some((CodeField::from_key(base)?, scenario))
    }

    pub(crate) fn field(&self, key: &str) -> Option<Option<&str>> {
        let (field, scenario) = Self::resolve(key)?;
        Some(self.get(scenario).get(field))
    }

    pub(crate) fn set_field(
        &mut self,
        entity: &'static str,
        key: &str,
        value: Option<String>,
    ) -> Result<(), RecordError> {
        let (field, scenario) = Self::resolve(key).ok_or_else(|| RecordError::UnknownField {
            entity,
            field: key.to_string(),
        })?;
        self.get_mut(scenario).set(field, value);
        Ok(())
    }
}
