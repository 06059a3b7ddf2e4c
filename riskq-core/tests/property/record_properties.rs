use proptest::prelude::*;

use riskq_core::records::{
    CascadeAnalysis, CodeField, DirectAnalysis, RiskCategory, RiskFile, RiskType, Scenario,
};
use riskq_core::traits::Record;

fn scenario() -> impl Strategy<Value = Scenario> {
    prop::sample::select(Scenario::ALL.to_vec())
}

fn code_field() -> impl Strategy<Value = CodeField> {
    prop::sample::select(CodeField::ALL.to_vec())
}

proptest! {
    #[test]
    fn risk_file_code_keys_round_trip(
        scenario in scenario(),
        field in code_field(),
        code in "[A-Z]{2}[0-5]",
    ) {
        let mut rf = RiskFile::new("rf-1", "Flooding", RiskType::Standard, RiskCategory::Nature);
        let key = field.scenario_key(scenario);

        rf.set_field(&key, Some(code.clone())).unwrap();
        prop_assert_eq!(rf.field(&key).unwrap(), Some(code.as_str()));
        prop_assert_eq!(rf.scenario(scenario).get(field), Some(code.as_str()));

        // Every other key stays empty.
        for other_scenario in Scenario::ALL {
            for other_field in CodeField::ALL {
                if (other_scenario, other_field) != (scenario, field) {
                    prop_assert_eq!(rf.field(&other_field.scenario_key(other_scenario)).unwrap(), None);
                }
            }
        }

        rf.set_field(&key, None).unwrap();
        prop_assert_eq!(rf.field(&key).unwrap(), None);
    }

    #[test]
    fn direct_analysis_blank_values_clear(
        scenario in scenario(),
        field in code_field(),
        blank in "[ \t]{0,4}",
    ) {
        let mut analysis = DirectAnalysis::new("da-1", "e1", "rf-1");
        let key = field.scenario_key(scenario);

        analysis.set_field(&key, Some("DP2".to_string())).unwrap();
        analysis.set_field(&key, Some(blank)).unwrap();
        prop_assert_eq!(analysis.field(&key).unwrap(), None);
    }

    #[test]
    fn cascade_matrix_keys_round_trip(
        cause in scenario(),
        effect in scenario(),
        code in "CP[0-5]",
    ) {
        let mut analysis = CascadeAnalysis::new("ca-1", "e1", "rf-2", "rf-1");
        let key = format!("{}2{}", cause.suffix(), effect.suffix());

        analysis.set_field(&key, Some(code.clone())).unwrap();
        prop_assert_eq!(analysis.field(&key).unwrap(), Some(code.as_str()));
        prop_assert_eq!(analysis.matrix.get(cause, effect), Some(code.as_str()));
    }

    #[test]
    fn unknown_keys_are_rejected(key in "[a-z]{1,3}_[xyz]") {
        let mut rf = RiskFile::new("rf-1", "Flooding", RiskType::Standard, RiskCategory::Nature);
        prop_assert!(rf.set_field(&key, Some("HA1".to_string())).is_err());
        prop_assert!(rf.field(&key).is_err());
    }
}
