use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::HighlightedRaster;
use crate::image_pipeline::output::types::OutputConfig;

pub trait HighlightWriter {
    fn write_image(&self, image: &HighlightedRaster, output: &mut dyn Write, config: &OutputConfig) -> Result<()>;
}
