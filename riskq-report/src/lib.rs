//! # riskq-report
//!
//! Turns a risk file and its aggregate into a paginated document, and reads
//! files the user picks for import.

pub mod builder;
pub mod import;
pub mod model;

pub use builder::ReportBuilder;
pub use import::ImportedFile;
pub use model::{Block, ChartSeries, KeyValueRow, Page, Report};
