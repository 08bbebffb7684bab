//! Filesystem result sink.
//!
//! Writes `coordinates_temperature_image{label}.txt` and
//! `highlighted_image{label}.{png,tiff}` into the configured output directory,
//! overwriting previous artifacts with the same label.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::{debug, instrument};
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::HighlightedRaster;
use crate::image_pipeline::thermal::RiskPoint;
use crate::image_pipeline::output::coordinates::{coordinates_file_name, write_coordinates};
use crate::image_pipeline::output::png_writer::PngHighlightWriter;
use crate::image_pipeline::output::standard_tiff_writer::StandardTiffWriter;
use crate::image_pipeline::output::sink::ResultSink;
use crate::image_pipeline::output::types::{OutputConfig, OutputFormat};
use crate::image_pipeline::output::writer::HighlightWriter;

pub fn image_file_name(label: &str, format: OutputFormat) -> String {
    format!("highlighted_image{}.{}", label, format.extension())
}

pub struct FileResultSink {
    config: OutputConfig,
}

impl FileResultSink {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    fn create(&self, file_name: &str) -> Result<(PathBuf, BufWriter<File>)> {
        let path = self.config.output_dir.join(file_name);
        let file = File::create(&path).map_err(|e| {
            AnalysisError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        Ok((path, BufWriter::new(file)))
    }
}

impl Default for FileResultSink {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

impl ResultSink for FileResultSink {
    #[instrument(skip(self, points), fields(points = points.len()))]
    fn persist_coordinates(&self, points: &[RiskPoint], label: &str) -> Result<PathBuf> {
        let (path, mut writer) = self.create(&coordinates_file_name(label))?;
        write_coordinates(points, &mut writer)?;
        debug!(path = %path.display(), "Coordinates written");
        Ok(path)
    }

    #[instrument(skip(self, image), fields(width = image.width, height = image.height))]
    fn persist_image(&self, image: &HighlightedRaster, label: &str) -> Result<PathBuf> {
        let format = self.config.image_format;
        let (path, mut writer) = self.create(&image_file_name(label, format))?;

        match format {
            OutputFormat::Png => PngHighlightWriter.write_image(image, &mut writer, &self.config)?,
            OutputFormat::Tiff => StandardTiffWriter.write_image(image, &mut writer, &self.config)?,
        }

        writer.into_inner().map_err(|e| {
            AnalysisError::OutputWriteError(format!("{}: {}", path.display(), e.error()))
        })?;
        debug!(path = %path.display(), "Highlighted image written");
        Ok(path)
    }
}
