use riskq_core::constants::{SCALE_MAX, SCALE_MIN};
use riskq_core::records::CodeField;

use crate::code::{parse_code, ScaleKind};

/// Scale position of a coded level in [0, 5]. Null and unrecognized codes
/// count as zero.
pub fn to_numeric(code: Option<&str>) -> f64 {
    code.and_then(parse_code)
        .map(|c| f64::from(c.level))
        .unwrap_or(SCALE_MIN)
}

/// Like [`to_numeric`], but a code from a different scale is also a miss.
pub fn to_numeric_for(kind: ScaleKind, code: Option<&str>) -> f64 {
    match code.and_then(parse_code) {
        Some(c) if c.kind == kind => f64::from(c.level),
        _ => SCALE_MIN,
    }
}

/// Scale position of a code on its expected scale, `None` on any miss.
/// Aggregation uses this to tell an unusable submission from a real zero.
pub fn level_for(kind: ScaleKind, code: &str) -> Option<f64> {
    parse_code(code)
        .filter(|c| c.kind == kind)
        .map(|c| f64::from(c.level))
}

/// The scale a record field is coded on.
pub fn kind_for_field(field: CodeField) -> ScaleKind {
    match field {
        CodeField::DirectProbability => ScaleKind::DirectProbability,
        CodeField::Human => ScaleKind::Human,
        CodeField::Societal => ScaleKind::Societal,
        CodeField::Environmental => ScaleKind::Environmental,
        CodeField::Financial => ScaleKind::Financial,
        CodeField::ClimateChange => ScaleKind::ClimateChange,
    }
}

/// Inverse of [`to_numeric`] for sliders: the nearest coded level to a
/// continuous position. Positions outside [0, 5] are clamped.
pub fn code_for_position(kind: ScaleKind, position: f64) -> String {
    let clamped = if position.is_nan() {
        SCALE_MIN
    } else {
        position.clamp(SCALE_MIN, SCALE_MAX)
    };
    format!("{}{}", kind.prefix(), clamped.round() as u8)
}

/// Shift in direct probability between today and the 2050 projection.
/// `None` unless both codes are recognized on their own scales.
pub fn climate_change_delta(dp: Option<&str>, cc: Option<&str>) -> Option<f64> {
    let today = level_for(ScaleKind::DirectProbability, dp?)?;
    let future = level_for(ScaleKind::ClimateChange, cc?)?;
    Some(future - today)
}
