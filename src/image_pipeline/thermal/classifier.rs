//! Dual-threshold risk classification.
//!
//! A pixel is risky only when it is both relatively hot (pseudo-temperature at
//! or above the temperature threshold) and absolutely bright (raw brightness at
//! or above the brightness threshold). Relative heat alone would flag the
//! brightest corner of an otherwise dark image.

use tracing::debug;
use crate::image_pipeline::raster::{HighlightedRaster, Raster};
use crate::image_pipeline::thermal::config::AnalysisConfig;
use crate::image_pipeline::thermal::mapper::TemperatureMapper;
use crate::image_pipeline::thermal::range::BrightnessRange;

/// One flagged pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskPoint {
    pub x: usize,
    pub y: usize,
    pub temperature: f64,
}

/// Output of one classification pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Flagged pixels in row-major scan order
    pub risk_points: Vec<RiskPoint>,
    pub highlighted: HighlightedRaster,
}

#[derive(Debug, Clone)]
pub struct RiskClassifier {
    min_temp_threshold: f64,
    min_bright_threshold: u8,
    marker_color: [u8; 3],
}

impl RiskClassifier {
    pub fn new(min_temp_threshold: f64, min_bright_threshold: u8, marker_color: [u8; 3]) -> Self {
        Self {
            min_temp_threshold,
            min_bright_threshold,
            marker_color,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.min_temp_threshold,
            config.min_bright_threshold,
            config.marker_color,
        )
    }

    pub fn is_risky(&self, temperature: f64, bright: u8) -> bool {
        temperature >= self.min_temp_threshold && bright >= self.min_bright_threshold
    }

    /// Classifies every pixel of `raster` against `range` in a single row-major pass.
    pub fn classify(&self, raster: &Raster, range: BrightnessRange) -> ClassificationResult {
        let mapper = TemperatureMapper::new(range);
        let mut risk_points = Vec::new();
        let mut data = Vec::with_capacity(raster.samples().len() * 3);

        for (x, y, bright) in raster.pixels() {
            let temperature = mapper.temperature(bright);
            if self.is_risky(temperature, bright) {
                risk_points.push(RiskPoint { x, y, temperature });
                data.extend_from_slice(&self.marker_color);
            } else {
                data.extend_from_slice(&[bright, bright, bright]);
            }
        }

        debug!(
            flagged = risk_points.len(),
            total = raster.samples().len(),
            "Classification pass complete"
        );

        ClassificationResult {
            risk_points,
            highlighted: HighlightedRaster {
                width: raster.width(),
                height: raster.height(),
                data,
            },
        }
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
