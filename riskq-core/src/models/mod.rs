pub mod analysis_data;
pub mod quality;

pub use analysis_data::{
    AggregatedValue, AnalysisData, CascadeAggregate, CascadeCell, ScenarioAggregate,
    ScenarioLevels,
};
pub use quality::{Quality, QualityCounts};
