//! # riskq-worker
//!
//! Runs aggregation off the interactive path. Callers hand the worker an
//! owned snapshot of a risk file and its submissions; the worker replies
//! with the computed [`AnalysisData`](riskq_core::AnalysisData) or an error.
//! Nothing is shared between the worker and its callers besides the channel.

pub mod request;
pub mod worker;

pub use request::ComputeRequest;
pub use worker::{AggregationWorker, WorkerHandle};
