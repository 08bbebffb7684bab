//! Analysis configuration types

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::thermal::mapper::TEMPERATURE_SCALE;

/// Marker color painted over flagged pixels.
pub const DEFAULT_MARKER_COLOR: [u8; 3] = [255, 10, 0];

/// Configuration for thermal risk analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Minimum pseudo-temperature (0-100) a pixel must reach to be flagged
    pub min_temp_threshold: f64,
    /// Minimum raw brightness (0-255) a pixel must reach to be flagged
    pub min_bright_threshold: u8,
    /// RGB color written over flagged pixels in the highlighted image
    pub marker_color: [u8; 3],
    /// Whether to check decoded dimensions against `max_dimension`
    pub validate_dimensions: bool,
    /// Largest accepted width or height
    pub max_dimension: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_temp_threshold: 80.0,
            min_bright_threshold: 180,
            marker_color: DEFAULT_MARKER_COLOR,
            validate_dimensions: true,
            max_dimension: Some(50000),
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Rejects thresholds outside their documented ranges.
    pub fn validate(&self) -> Result<()> {
        let t = self.min_temp_threshold;
        if !(0.0..=TEMPERATURE_SCALE).contains(&t) {
            return Err(AnalysisError::InvalidConfiguration(format!(
                "min_temp_threshold must be within 0-100, got {}",
                t
            )));
        }
        if self.max_dimension == Some(0) {
            return Err(AnalysisError::InvalidConfiguration(
                "max_dimension must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    min_temp_threshold: Option<f64>,
    min_bright_threshold: Option<u8>,
    marker_color: Option<[u8; 3]>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl AnalysisConfigBuilder {
    pub fn min_temp_threshold(mut self, threshold: f64) -> Self {
        self.min_temp_threshold = Some(threshold);
        self
    }

    pub fn min_bright_threshold(mut self, threshold: u8) -> Self {
        self.min_bright_threshold = Some(threshold);
        self
    }

    pub fn marker_color(mut self, color: [u8; 3]) -> Self {
        self.marker_color = Some(color);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            min_temp_threshold: self.min_temp_threshold.unwrap_or(default.min_temp_threshold),
            min_bright_threshold: self.min_bright_threshold.unwrap_or(default.min_bright_threshold),
            marker_color: self.marker_color.unwrap_or(default.marker_color),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
