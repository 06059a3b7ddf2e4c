use riskq_core::constants::UNKNOWN_LEVEL_LABEL;

use crate::code::parse_code;
use crate::tables::{scale, ScaleEntry};

/// What a form or card shows for a coded level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDisplay {
    pub interval: &'static str,
    pub unit: &'static str,
}

/// Table entry for a coded level, or `None` on a miss.
pub fn lookup(code: &str) -> Option<&'static ScaleEntry> {
    let code = parse_code(code)?;
    scale(code.kind).entry(code.level)
}

/// Interval description and unit label for a coded level.
pub fn describe(code: &str) -> Option<LevelDisplay> {
    let parsed = parse_code(code)?;
    let table = scale(parsed.kind);
    let entry = table.entry(parsed.level)?;
    Some(LevelDisplay {
        interval: entry.interval,
        unit: table.unit,
    })
}

/// Like [`describe`], but a missing or unrecognized code falls back to the
/// default display value instead of surfacing a failure.
pub fn describe_or_default(code: Option<&str>) -> LevelDisplay {
    match code.and_then(describe) {
        Some(display) => display,
        None => {
            if let Some(code) = code {
                tracing::debug!(code, "unrecognized scale code, using default display");
            }
            LevelDisplay {
                interval: UNKNOWN_LEVEL_LABEL,
                unit: "",
            }
        }
    }
}
