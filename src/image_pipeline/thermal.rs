//! Thermal risk core
//!
//! Brightness range scan, pseudo-temperature mapping and dual-threshold
//! classification. Nothing in here performs I/O.

pub mod config;
mod range;
mod mapper;
mod classifier;

pub use config::{AnalysisConfig, AnalysisConfigBuilder, DEFAULT_MARKER_COLOR};
pub use range::{BrightnessRange, scan_brightness_range};
pub use mapper::{TemperatureMapper, brightness_to_temperature, TEMPERATURE_SCALE};
pub use classifier::{ClassificationResult, RiskClassifier, RiskPoint};
