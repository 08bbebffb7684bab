//! Analysis orchestration module
//!
//! Wires a raster reader, the thermal core and a result sink into one pipeline.

mod thermal_risk;
mod types;


pub use thermal_risk::ThermalRiskPipeline;
pub use types::{AnalysisOutcome, AnalysisReport, PersistedArtifacts};
