use serde::{Deserialize, Serialize};
use ts_rs::TS;

use riskq_core::errors::WizardError;
use riskq_core::records::RiskType;

/// Named wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    Introduction,
    Causes,
    Attacks,
    ClimateChange,
    CatalysingEffects,
    Quantitative,
    Qualitative,
    Review,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::Introduction => "Introduction",
            Step::Causes => "Causes",
            Step::Attacks => "Attacks",
            Step::ClimateChange => "Climate change",
            Step::CatalysingEffects => "Catalysing effects",
            Step::Quantitative => "Quantitative estimates",
            Step::Qualitative => "Qualitative justification",
            Step::Review => "Review",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nav {
    Next,
    Previous,
}

impl Nav {
    fn direction(self) -> &'static str {
        match self {
            Nav::Next => "next",
            Nav::Previous => "previous",
        }
    }
}

/// Which wizard is running. Cascade flows depend on the risk type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "risk_type")]
pub enum Flow {
    Cascade(RiskType),
    Direct,
}

use Step::*;

const STANDARD: &[(Step, Step)] = &[
    (Introduction, Causes),
    (Causes, ClimateChange),
    (ClimateChange, CatalysingEffects),
];

const MALICIOUS: &[(Step, Step)] = &[(Introduction, Attacks), (Attacks, CatalysingEffects)];

const EMERGING: &[(Step, Step)] = &[(Introduction, CatalysingEffects)];

const DIRECT: &[(Step, Step)] = &[
    (Introduction, Quantitative),
    (Quantitative, Qualitative),
    (Qualitative, Review),
];

impl Flow {
    /// Forward edges of the flow. `Previous` walks them backwards.
    pub fn transitions(self) -> &'static [(Step, Step)] {
        match self {
            Flow::Cascade(RiskType::Standard) => STANDARD,
            Flow::Cascade(RiskType::Malicious) => MALICIOUS,
            Flow::Cascade(RiskType::Emerging) => EMERGING,
            Flow::Direct => DIRECT,
        }
    }

    pub fn first(self) -> Step {
        Introduction
    }

    /// Steps in order, walked from the first step along the table.
    pub fn steps(self) -> Vec<Step> {
        let mut steps = vec![self.first()];
        let mut current = self.first();
        while let Some((_, next)) = self.transitions().iter().find(|(from, _)| *from == current) {
            steps.push(*next);
            current = *next;
        }
        steps
    }

    pub fn contains(self, step: Step) -> bool {
        step == self.first() || self.transitions().iter().any(|(_, to)| *to == step)
    }

    pub fn name(self) -> &'static str {
        match self {
            Flow::Cascade(RiskType::Standard) => "standard cascade",
            Flow::Cascade(RiskType::Malicious) => "malicious cascade",
            Flow::Cascade(RiskType::Emerging) => "emerging cascade",
            Flow::Direct => "direct analysis",
        }
    }
}

/// Move one step forward or backward. Skipping is impossible: only edges
/// in the flow's table are followed.
pub fn transition(flow: Flow, from: Step, nav: Nav) -> Result<Step, WizardError> {
    if !flow.contains(from) {
        return Err(WizardError::StepNotInFlow {
            flow: flow.name().to_string(),
            step: from.label().to_string(),
        });
    }

    let edges = flow.transitions();
    let target = match nav {
        Nav::Next => edges.iter().find(|(a, _)| *a == from).map(|(_, b)| *b),
        Nav::Previous => edges.iter().find(|(_, b)| *b == from).map(|(a, _)| *a),
    };

    target.ok_or_else(|| WizardError::NoTransition {
        flow: flow.name().to_string(),
        step: from.label().to_string(),
        direction: nav.direction(),
    })
}
