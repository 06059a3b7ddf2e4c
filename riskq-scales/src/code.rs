use serde::{Deserialize, Serialize};

use riskq_core::constants::SCALE_MAX;

/// The ordinal scales a coded level can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    DirectProbability,
    ConditionalProbability,
    ClimateChange,
    Human,
    Societal,
    Environmental,
    Financial,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 7] = [
        ScaleKind::DirectProbability,
        ScaleKind::ConditionalProbability,
        ScaleKind::ClimateChange,
        ScaleKind::Human,
        ScaleKind::Societal,
        ScaleKind::Environmental,
        ScaleKind::Financial,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            ScaleKind::DirectProbability => "DP",
            ScaleKind::ConditionalProbability => "CP",
            ScaleKind::ClimateChange => "CC",
            ScaleKind::Human => "HA",
            ScaleKind::Societal => "SA",
            ScaleKind::Environmental => "EA",
            ScaleKind::Financial => "FA",
        }
    }

    /// Case-insensitive prefix match.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        ScaleKind::ALL
            .into_iter()
            .find(|k| k.prefix().eq_ignore_ascii_case(prefix))
    }
}

/// A parsed coded level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub kind: ScaleKind,
    pub level: u8,
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.level)
    }
}

/// Parse `prefix + digit`. Surrounding whitespace is ignored; anything else
/// (unknown prefix, missing or extra characters, digit above 5) is a miss.
pub fn parse_code(raw: &str) -> Option<Code> {
    let raw = raw.trim();
    let split = raw.find(|c: char| !c.is_ascii_alphabetic())?;
    let (prefix, digits) = raw.split_at(split);

    let mut chars = digits.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || f64::from(digit) > SCALE_MAX {
        return None;
    }

    Some(Code {
        kind: ScaleKind::from_prefix(prefix)?,
        level: digit as u8,
    })
}
