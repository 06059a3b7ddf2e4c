//! # riskq-scales
//!
//! Static tables mapping coded ordinal levels (`DP3`, `HA2`, `CP5`) to
//! human-readable intervals, and the numeric conversion used to chart and
//! compare levels across dimensions.
//!
//! Lookups never fail loudly: an unknown prefix or an out-of-range digit
//! is a miss (`None`), and numeric conversion treats a miss as zero.

pub mod code;
pub mod lookup;
pub mod numeric;
pub mod tables;

pub use code::{parse_code, Code, ScaleKind};
pub use lookup::{describe, describe_or_default, lookup, LevelDisplay};
pub use numeric::{
    climate_change_delta, code_for_position, kind_for_field, level_for, to_numeric,
    to_numeric_for,
};
pub use tables::{scale, Scale, ScaleEntry};
