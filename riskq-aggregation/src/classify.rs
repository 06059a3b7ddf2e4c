use riskq_core::models::{AggregatedValue, Quality};

/// Classify a set of submitted scale positions.
///
/// - empty → `Zero`
/// - spread (max − min) within `tolerance` → `Consensus`
/// - otherwise → `Average`
///
/// Depends only on the multiset of values, never on their order.
pub fn classify(values: &[f64], tolerance: f64) -> Quality {
    let Some((min, max)) = bounds(values) else {
        return Quality::Zero;
    };
    if max - min <= tolerance {
        Quality::Consensus
    } else {
        Quality::Average
    }
}

/// Classify and reduce a set of submitted scale positions to one value.
/// Zero quality yields value 0; otherwise the arithmetic mean.
pub fn aggregate_values(values: &[f64], tolerance: f64) -> AggregatedValue {
    let quality = classify(values, tolerance);
    if quality == Quality::Zero {
        return AggregatedValue::zero();
    }
    AggregatedValue {
        value: mean(values),
        quality,
        submissions: values.len(),
    }
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
    )
}

/// Mean over the sorted values so the floating-point sum is identical for
/// every permutation of the input.
fn mean(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.iter().sum::<f64>() / sorted.len() as f64
}
