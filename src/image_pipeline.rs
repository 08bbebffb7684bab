//! Image processing pipeline module
//!
//! This module provides a structured approach to thermal risk analysis,
//! with separate modules for raster reading, the brightness/temperature core,
//! result output, and analysis orchestration.

pub mod raster;
pub mod thermal;
pub mod output;
pub mod analysis;
pub mod common;

pub use common::{
    AnalysisError,
    Result,
};

pub use raster::{
    Raster,
    HighlightedRaster,
    RasterReader,
    StandardImageReader,
    RawLoaderReader,
    AutoRasterReader,
};

pub use thermal::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    BrightnessRange,
    TemperatureMapper,
    RiskClassifier,
    RiskPoint,
    ClassificationResult,
    scan_brightness_range,
    brightness_to_temperature,
};

pub use output::{
    OutputConfig,
    OutputConfigBuilder,
    OutputFormat,
    TiffCompression,
    ResultSink,
    FileResultSink,
    HighlightWriter,
    PngHighlightWriter,
    StandardTiffWriter,
};

pub use analysis::{
    ThermalRiskPipeline,
    AnalysisReport,
    AnalysisOutcome,
    PersistedArtifacts,
};
