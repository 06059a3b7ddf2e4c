/// Lowest position on every ordinal scale.
pub const SCALE_MIN: f64 = 0.0;

/// Highest position on every ordinal scale.
pub const SCALE_MAX: f64 = 5.0;

/// Number of filled segments a probability bar is split into.
pub const SCALE_SEGMENTS: usize = 5;

/// Display value used when a coded level is missing or unrecognized.
pub const UNKNOWN_LEVEL_LABEL: &str = "Unknown";

/// Page title used before any flow has set one.
pub const DEFAULT_PAGE_TITLE: &str = "Risk assessment";

/// Environment variable read by the tracing setup.
pub const LOG_ENV_VAR: &str = "RISKQ_LOG";

/// Crate version, embedded in exported reports.
pub const RISKQ_VERSION: &str = env!("CARGO_PKG_VERSION");
