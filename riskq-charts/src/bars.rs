use serde::{Deserialize, Serialize};
use ts_rs::TS;

use riskq_core::constants::{SCALE_MAX, SCALE_MIN, SCALE_SEGMENTS};

/// One segment of a five-segment probability bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BarSegment {
    /// 1-based scale level the segment stands for.
    pub level: u8,
    /// Filled fraction in [0, 1].
    pub fill: f64,
}

/// Split a scale position into five segments. Segment `i` is filled by
/// `clamp(value - i, 0, 1)`, so 2.5 fills two segments and half of the third.
pub fn probability_bars(value: f64) -> [BarSegment; SCALE_SEGMENTS] {
    let value = clamp_scale(value);
    std::array::from_fn(|i| BarSegment {
        level: (i + 1) as u8,
        fill: (value - i as f64).clamp(0.0, 1.0),
    })
}

/// Clamp into [0, 5]; NaN counts as 0.
pub(crate) fn clamp_scale(value: f64) -> f64 {
    if value.is_nan() {
        SCALE_MIN
    } else {
        value.clamp(SCALE_MIN, SCALE_MAX)
    }
}
