//! # riskq-charts
//!
//! Pure adapters between aggregated values in [0, 5] and what the chart
//! components draw: five-segment probability bars, marker positions along
//! a fixed-width track, and per-dimension / per-scenario / per-cause series.

pub mod bars;
pub mod marker;
pub mod series;

pub use bars::{probability_bars, BarSegment};
pub use marker::{Marker, Track};
pub use series::{cascade_series, impact_series, scenario_series, ScenarioPoint, SeriesPoint};
