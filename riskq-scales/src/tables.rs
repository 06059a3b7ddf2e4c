//! Interval tables, one per scale. Position 0 always means "none".

use super::code::ScaleKind;

/// One position on a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleEntry {
    pub level: u8,
    pub interval: &'static str,
}

/// A complete ordinal scale.
#[derive(Debug)]
pub struct Scale {
    pub kind: ScaleKind,
    pub name: &'static str,
    pub unit: &'static str,
    pub entries: [ScaleEntry; 6],
}

impl Scale {
    pub fn entry(&self, level: u8) -> Option<&ScaleEntry> {
        self.entries.get(usize::from(level))
    }
}

const fn entry(level: u8, interval: &'static str) -> ScaleEntry {
    ScaleEntry { level, interval }
}

static DIRECT_PROBABILITY: Scale = Scale {
    kind: ScaleKind::DirectProbability,
    name: "Direct probability",
    unit: "return period",
    entries: [
        entry(0, "Does not occur"),
        entry(1, "Less than once in 500 years"),
        entry(2, "Once in 50 to 500 years"),
        entry(3, "Once in 5 to 50 years"),
        entry(4, "Once in 6 months to 5 years"),
        entry(5, "More than twice a year"),
    ],
};

static CLIMATE_CHANGE: Scale = Scale {
    kind: ScaleKind::ClimateChange,
    name: "Direct probability in 2050",
    unit: "return period",
    entries: [
        entry(0, "Does not occur"),
        entry(1, "Less than once in 500 years"),
        entry(2, "Once in 50 to 500 years"),
        entry(3, "Once in 5 to 50 years"),
        entry(4, "Once in 6 months to 5 years"),
        entry(5, "More than twice a year"),
    ],
};

static CONDITIONAL_PROBABILITY: Scale = Scale {
    kind: ScaleKind::ConditionalProbability,
    name: "Conditional probability",
    unit: "probability the cause triggers the effect",
    entries: [
        entry(0, "0%"),
        entry(1, "Less than 1%"),
        entry(2, "1% to 10%"),
        entry(3, "10% to 50%"),
        entry(4, "50% to 90%"),
        entry(5, "More than 90%"),
    ],
};

static HUMAN: Scale = Scale {
    kind: ScaleKind::Human,
    name: "Human impact",
    unit: "persons affected",
    entries: [
        entry(0, "None"),
        entry(1, "Fewer than 10"),
        entry(2, "10 to 100"),
        entry(3, "100 to 1 000"),
        entry(4, "1 000 to 10 000"),
        entry(5, "More than 10 000"),
    ],
};

static SOCIETAL: Scale = Scale {
    kind: ScaleKind::Societal,
    name: "Societal impact",
    unit: "million EUR equivalent",
    entries: [
        entry(0, "None"),
        entry(1, "Less than 1"),
        entry(2, "1 to 10"),
        entry(3, "10 to 100"),
        entry(4, "100 to 1 000"),
        entry(5, "More than 1 000"),
    ],
};

static ENVIRONMENTAL: Scale = Scale {
    kind: ScaleKind::Environmental,
    name: "Environmental impact",
    unit: "km² of damaged ecosystem",
    entries: [
        entry(0, "None"),
        entry(1, "Less than 1"),
        entry(2, "1 to 10"),
        entry(3, "10 to 100"),
        entry(4, "100 to 1 000"),
        entry(5, "More than 1 000"),
    ],
};

static FINANCIAL: Scale = Scale {
    kind: ScaleKind::Financial,
    name: "Financial impact",
    unit: "million EUR",
    entries: [
        entry(0, "None"),
        entry(1, "Less than 1"),
        entry(2, "1 to 10"),
        entry(3, "10 to 100"),
        entry(4, "100 to 1 000"),
        entry(5, "More than 1 000"),
    ],
};

/// The table for a scale.
pub fn scale(kind: ScaleKind) -> &'static Scale {
    match kind {
        ScaleKind::DirectProbability => &DIRECT_PROBABILITY,
        ScaleKind::ConditionalProbability => &CONDITIONAL_PROBABILITY,
        ScaleKind::ClimateChange => &CLIMATE_CHANGE,
        ScaleKind::Human => &HUMAN,
        ScaleKind::Societal => &SOCIETAL,
        ScaleKind::Environmental => &ENVIRONMENTAL,
        ScaleKind::Financial => &FINANCIAL,
    }
}
