use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How an aggregate was derived from the expert submissions behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quality {
    /// Submissions agree within the configured tolerance.
    Consensus,
    /// Submissions diverge; the numeric mean is used.
    Average,
    /// No usable submission exists.
    Zero,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Consensus => "CONSENSUS",
            Quality::Average => "AVERAGE",
            Quality::Zero => "ZERO",
        }
    }
}

impl Quality {
    /// Combine the qualities of the parts of an aggregate: `Zero` when no
    /// part had a usable submission, `Average` when any part was averaged,
    /// `Consensus` otherwise. Order-independent.
    pub fn combine(parts: impl IntoIterator<Item = Quality>) -> Quality {
        let mut combined = Quality::Zero;
        for part in parts {
            match part {
                Quality::Average => return Quality::Average,
                Quality::Consensus => combined = Quality::Consensus,
                Quality::Zero => {}
            }
        }
        combined
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tally of classifications across the fields of an aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityCounts {
    pub consensus: usize,
    pub average: usize,
    pub zero: usize,
}

impl QualityCounts {
    pub fn record(&mut self, quality: Quality) {
        match quality {
            Quality::Consensus => self.consensus += 1,
            Quality::Average => self.average += 1,
            Quality::Zero => self.zero += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.consensus + self.average + self.zero
    }

    pub fn get(&self, quality: Quality) -> usize {
        match quality {
            Quality::Consensus => self.consensus,
            Quality::Average => self.average,
            Quality::Zero => self.zero,
        }
    }
}
