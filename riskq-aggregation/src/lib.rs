//! # riskq-aggregation
//!
//! Converts per-expert coded submissions into normalized probability and
//! impact scores, classifying each aggregate as CONSENSUS, AVERAGE or ZERO.

pub mod cascade;
pub mod classify;
pub mod direct;
pub mod engine;

pub use classify::{aggregate_values, classify};
pub use engine::AggregationEngine;
