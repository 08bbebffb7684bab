use std::path::PathBuf;
use crate::image_pipeline::raster::HighlightedRaster;
use crate::image_pipeline::thermal::{BrightnessRange, ClassificationResult, RiskPoint};

/// Everything one analysis run computed for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub width: usize,
    pub height: usize,
    pub range: BrightnessRange,
    /// Flagged pixels in row-major scan order
    pub risk_points: Vec<RiskPoint>,
    pub highlighted: HighlightedRaster,
}

impl AnalysisReport {
    pub(crate) fn new(range: BrightnessRange, result: ClassificationResult) -> Self {
        Self {
            width: result.highlighted.width,
            height: result.highlighted.height,
            range,
            risk_points: result.risk_points,
            highlighted: result.highlighted,
        }
    }

    pub fn risk_count(&self) -> usize {
        self.risk_points.len()
    }
}

/// Where the sink put the artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedArtifacts {
    pub coordinates_path: PathBuf,
    pub image_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub artifacts: PersistedArtifacts,
}
