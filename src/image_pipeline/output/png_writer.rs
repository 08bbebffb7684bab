use std::io::Write;
use tracing::debug;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::png::PngEncoder;
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::HighlightedRaster;
use crate::image_pipeline::output::types::OutputConfig;
use crate::image_pipeline::output::writer::HighlightWriter;

pub struct PngHighlightWriter;

impl HighlightWriter for PngHighlightWriter {
    fn write_image(&self, image: &HighlightedRaster, output: &mut dyn Write, _config: &OutputConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        PngEncoder::new(output)
            .write_image(
                &image.data,
                image.width as u32,
                image.height as u32,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| AnalysisError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
