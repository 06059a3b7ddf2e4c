//! Record builders and JSON fixtures shared by the riskq test suites.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use riskq_core::records::{
    CascadeAnalysis, CodeField, DirectAnalysis, RiskCategory, RiskFile, RiskType, Scenario,
    Validation,
};

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file from `test-fixtures/data`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A risk file together with every submission made about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub risk_file: RiskFile,
    pub direct: Vec<DirectAnalysis>,
    pub cascades: Vec<CascadeAnalysis>,
    pub validations: Vec<Validation>,
}

/// The flooding panel: three experts, two causes.
pub fn flooding_panel() -> Panel {
    load_fixture("flooding_panel.json")
}

/// A standard risk file with no codes set.
pub fn risk_file(id: &str) -> RiskFile {
    RiskFile::new(id, format!("Risk {id}"), RiskType::Standard, RiskCategory::Nature)
}

/// A risk file of the given type.
pub fn risk_file_of_type(id: &str, risk_type: RiskType) -> RiskFile {
    RiskFile::new(id, format!("Risk {id}"), risk_type, RiskCategory::ManMade)
}

/// A direct analysis with the given codes set on one scenario.
pub fn direct_analysis(
    expert_id: &str,
    risk_file_id: &str,
    scenario: Scenario,
    codes: &[(CodeField, &str)],
) -> DirectAnalysis {
    let mut analysis = DirectAnalysis::new(
        format!("da-{expert_id}-{risk_file_id}"),
        expert_id,
        risk_file_id,
    );
    for (field, code) in codes {
        analysis
            .scenarios
            .get_mut(scenario)
            .set(*field, Some((*code).to_string()));
    }
    analysis
}

/// A direct analysis with the same codes set on all three scenarios.
pub fn uniform_analysis(
    expert_id: &str,
    risk_file_id: &str,
    codes: &[(CodeField, &str)],
) -> DirectAnalysis {
    let mut analysis = direct_analysis(expert_id, risk_file_id, Scenario::Considerable, codes);
    for scenario in [Scenario::Major, Scenario::Extreme] {
        for (field, code) in codes {
            analysis
                .scenarios
                .get_mut(scenario)
                .set(*field, Some((*code).to_string()));
        }
    }
    analysis
}

/// A cascade analysis with the given matrix cells set.
pub fn cascade_analysis(
    expert_id: &str,
    cause_id: &str,
    effect_id: &str,
    cells: &[(Scenario, Scenario, &str)],
) -> CascadeAnalysis {
    let mut analysis = CascadeAnalysis::new(
        format!("ca-{expert_id}-{cause_id}-{effect_id}"),
        expert_id,
        cause_id,
        effect_id,
    );
    for (cause, effect, code) in cells {
        analysis.matrix.set(*cause, *effect, Some((*code).to_string()));
    }
    analysis
}
