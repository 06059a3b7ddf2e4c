use proptest::prelude::*;
use riskq_scales::*;

fn arb_kind() -> impl Strategy<Value = ScaleKind> {
    prop_oneof![
        Just(ScaleKind::DirectProbability),
        Just(ScaleKind::ConditionalProbability),
        Just(ScaleKind::ClimateChange),
        Just(ScaleKind::Human),
        Just(ScaleKind::Societal),
        Just(ScaleKind::Environmental),
        Just(ScaleKind::Financial),
    ]
}

proptest! {
    // Higher coded levels never convert to a lower position.
    #[test]
    fn numeric_conversion_is_monotonic(kind in arb_kind(), a in 0u8..=5, b in 0u8..=5) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_code = format!("{}{}", kind.prefix(), lo);
        let hi_code = format!("{}{}", kind.prefix(), hi);
        prop_assert!(to_numeric(Some(&lo_code)) <= to_numeric(Some(&hi_code)));
        prop_assert!(
            to_numeric_for(kind, Some(&lo_code)) <= to_numeric_for(kind, Some(&hi_code))
        );
    }

    #[test]
    fn numeric_conversion_stays_in_range(raw in "\\PC{0,6}") {
        let value = to_numeric(Some(&raw));
        prop_assert!((0.0..=5.0).contains(&value));
    }

    #[test]
    fn slider_inverse_roundtrips_whole_levels(kind in arb_kind(), level in 0u8..=5) {
        let code = code_for_position(kind, f64::from(level));
        prop_assert_eq!(to_numeric_for(kind, Some(&code)), f64::from(level));
    }
}
