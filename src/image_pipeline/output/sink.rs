use std::path::PathBuf;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::HighlightedRaster;
use crate::image_pipeline::thermal::RiskPoint;

/// Destination for the two analysis artifacts, keyed by a run label.
pub trait ResultSink {
    fn persist_coordinates(&self, points: &[RiskPoint], label: &str) -> Result<PathBuf>;
    fn persist_image(&self, image: &HighlightedRaster, label: &str) -> Result<PathBuf>;
}
