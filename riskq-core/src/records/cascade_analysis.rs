use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::RecordError;
use crate::traits::Record;

use super::risk_file::unknown;
use super::{normalize, Scenario};

/// Conditional probability codes (`CP0`..`CP5`) that a cause scenario
/// triggers an effect scenario. Field `m2e` reads "cause in its major
/// scenario leads to the effect's extreme scenario".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeMatrix {
    pub c2c: Option<String>,
    pub c2m: Option<String>,
    pub c2e: Option<String>,
    pub m2c: Option<String>,
    pub m2m: Option<String>,
    pub m2e: Option<String>,
    pub e2c: Option<String>,
    pub e2m: Option<String>,
    pub e2e: Option<String>,
}

impl CascadeMatrix {
    pub fn key(cause: Scenario, effect: Scenario) -> String {
        format!("{}2{}", cause.suffix(), effect.suffix())
    }

    fn parse_key(key: &str) -> Option<(Scenario, Scenario)> {
        let (cause, effect) = key.split_once('2')?;
        Some((Scenario::from_suffix(cause)?, Scenario::from_suffix(effect)?))
    }

    fn slot(&self, cause: Scenario, effect: Scenario) -> &Option<String> {
        use Scenario::*;
        match (cause, effect) {
            (Considerable, Considerable) => &self.c2c,
            (Considerable, Major) => &self.c2m,
            (Considerable, Extreme) => &self.c2e,
            (Major, Considerable) => &self.m2c,
            (Major, Major) => &self.m2m,
            (Major, Extreme) => &self.m2e,
            (Extreme, Considerable) => &self.e2c,
            (Extreme, Major) => &self.e2m,
            (Extreme, Extreme) => &self.e2e,
        }
    }

    fn slot_mut(&mut self, cause: Scenario, effect: Scenario) -> &mut Option<String> {
        use Scenario::*;
        match (cause, effect) {
            (Considerable, Considerable) => &mut self.c2c,
            (Considerable, Major) => &mut self.c2m,
            (Considerable, Extreme) => &mut self.c2e,
            (Major, Considerable) => &mut self.m2c,
            (Major, Major) => &mut self.m2m,
            (Major, Extreme) => &mut self.m2e,
            (Extreme, Considerable) => &mut self.e2c,
            (Extreme, Major) => &mut self.e2m,
            (Extreme, Extreme) => &mut self.e2e,
        }
    }

    pub fn get(&self, cause: Scenario, effect: Scenario) -> Option<&str> {
        self.slot(cause, effect).as_deref()
    }

    pub fn set(&mut self, cause: Scenario, effect: Scenario, value: Option<String>) {
        *self.slot_mut(cause, effect) = normalize(value);
    }

    /// All nine cells, cause-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Scenario, Scenario, Option<&str>)> + '_ {
        Scenario::ALL.into_iter().flat_map(move |cause| {
            Scenario::ALL
                .into_iter()
                .map(move |effect| (cause, effect, self.get(cause, effect)))
        })
    }
}

/// One expert's estimate of how a cause risk file influences an effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CascadeAnalysis {
    pub id: String,
    pub expert_id: String,
    pub cause_id: String,
    pub effect_id: String,
    pub matrix: CascadeMatrix,
    pub quali: Option<String>,
}

impl CascadeAnalysis {
    /// A new, empty submission for one cause→effect edge, with a generated id.
    pub fn start(
        expert_id: impl Into<String>,
        cause_id: impl Into<String>,
        effect_id: impl Into<String>,
    ) -> Self {
        Self::new(super::new_id(), expert_id, cause_id, effect_id)
    }

    pub fn new(
        id: impl Into<String>,
        expert_id: impl Into<String>,
        cause_id: impl Into<String>,
        effect_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            expert_id: expert_id.into(),
            cause_id: cause_id.into(),
            effect_id: effect_id.into(),
            matrix: CascadeMatrix::default(),
            quali: None,
        }
    }
}

impl Record for CascadeAnalysis {
    const ENTITY: &'static str = "cascade_analysis";

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Result<Option<&str>, RecordError> {
        if key == "quali" {
            return Ok(self.quali.as_deref());
        }
        let (cause, effect) =
            CascadeMatrix::parse_key(key).ok_or_else(|| unknown(Self::ENTITY, key))?;
        Ok(self.matrix.get(cause, effect))
    }

    fn set_field(&mut self, key: &str, value: Option<String>) -> Result<(), RecordError> {
        if key == "quali" {
            self.quali = normalize(value);
            return Ok(());
        }
        let (cause, effect) =
            CascadeMatrix::parse_key(key).ok_or_else(|| unknown(Self::ENTITY, key))?;
        self.matrix.set(cause, effect, value);
        Ok(())
    }
}
