use proptest::prelude::*;
use riskq_aggregation::{aggregate_values, classify};
use riskq_core::models::Quality;

fn arb_levels() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u8..=5).prop_map(f64::from), 0..12)
}

proptest! {
    // Classification and value depend on the submission multiset only.
    #[test]
    fn classification_is_stable_under_reordering(
        values in arb_levels(),
        tolerance in prop_oneof![Just(0.0), Just(0.5), Just(1.0)],
        seed in any::<u64>(),
    ) {
        let mut shuffled = values.clone();
        // Deterministic rotation plus reversal as the permutation.
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
            if seed % 2 == 0 {
                shuffled.reverse();
            }
        }
        prop_assert_eq!(classify(&values, tolerance), classify(&shuffled, tolerance));
        let a = aggregate_values(&values, tolerance);
        let b = aggregate_values(&shuffled, tolerance);
        prop_assert_eq!(a.value.to_bits(), b.value.to_bits());
        prop_assert_eq!(a.submissions, b.submissions);
    }

    #[test]
    fn repeated_single_submission_is_consensus(level in 0u8..=5, n in 1usize..20) {
        let values = vec![f64::from(level); n];
        let agg = aggregate_values(&values, 0.0);
        prop_assert_eq!(agg.quality, Quality::Consensus);
        prop_assert_eq!(agg.value, f64::from(level));
    }

    #[test]
    fn aggregate_stays_within_submission_bounds(values in arb_levels()) {
        let agg = aggregate_values(&values, 0.0);
        if values.is_empty() {
            prop_assert_eq!(agg.quality, Quality::Zero);
            prop_assert_eq!(agg.value, 0.0);
        } else {
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(agg.value >= lo - 1e-9 && agg.value <= hi + 1e-9);
        }
    }
}
