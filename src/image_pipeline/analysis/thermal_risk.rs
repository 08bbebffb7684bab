use tracing::{info, instrument, warn};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{AnalysisError, Result},
    raster::{AutoRasterReader, Raster, RasterReader},
    thermal::{AnalysisConfig, RiskClassifier, scan_brightness_range},
    output::{FileResultSink, OutputConfig, ResultSink},
    analysis::types::{AnalysisOutcome, AnalysisReport, PersistedArtifacts},
};

pub struct ThermalRiskPipeline<R: RasterReader, S: ResultSink> {
    reader: R,
    sink: S,
    config: AnalysisConfig,
    classifier: RiskClassifier,
}

impl ThermalRiskPipeline<AutoRasterReader, FileResultSink> {
    pub fn new(config: AnalysisConfig, output: OutputConfig) -> Result<Self> {
        Self::with_custom(AutoRasterReader, FileResultSink::new(output), config)
    }
}

impl<R: RasterReader, S: ResultSink> ThermalRiskPipeline<R, S> {
    /// Fails with [`AnalysisError::InvalidConfiguration`] for out-of-range thresholds.
    pub fn with_custom(reader: R, sink: S, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            sink,
            classifier: RiskClassifier::from_config(&config),
            config,
        })
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(AnalysisError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Range scan followed by classification, two explicit passes.
    pub fn analyze_raster(&self, raster: &Raster) -> Result<AnalysisReport> {
        self.validate_dimensions(raster.width(), raster.height())?;

        let range = {
            let _span = tracing::info_span!("scan_range").entered();
            scan_brightness_range(raster)?
        };

        let result = {
            let _span = tracing::info_span!("classify",
                width = raster.width(),
                height = raster.height()
            ).entered();
            self.classifier.classify(raster, range)
        };

        info!(
            width = raster.width(),
            height = raster.height(),
            min = range.min,
            max = range.max,
            risk_points = result.risk_points.len(),
            "Analysis complete"
        );
        Ok(AnalysisReport::new(range, result))
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze(&self, input_data: &[u8]) -> Result<AnalysisReport> {
        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input_data)?
        };

        self.analyze_raster(&raster)
    }

    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<AnalysisReport> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Analyzing file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.analyze(&input_data)
    }

    /// Hands both artifacts of `report` to the sink under `label`.
    pub fn persist(&self, report: &AnalysisReport, label: &str) -> Result<PersistedArtifacts> {
        let coordinates_path = {
            let _span = tracing::info_span!("persist_coordinates").entered();
            self.sink.persist_coordinates(&report.risk_points, label)?
        };

        let image_path = {
            let _span = tracing::info_span!("persist_image").entered();
            self.sink.persist_image(&report.highlighted, label)?
        };

        Ok(PersistedArtifacts {
            coordinates_path,
            image_path,
        })
    }

    /// Analyzes `input_path` and persists its artifacts. Nothing is persisted
    /// when the analysis itself fails.
    #[instrument(skip(self, input_path))]
    pub fn process_file<P: AsRef<Path>>(&self, input_path: P, label: &str) -> Result<AnalysisOutcome> {
        let report = self.analyze_file(input_path)?;
        let artifacts = self.persist(&report, label)?;

        info!(
            coordinates = %artifacts.coordinates_path.display(),
            image = %artifacts.image_path.display(),
            "Results saved"
        );
        Ok(AnalysisOutcome { report, artifacts })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) -> Result<()> {
        config.validate()?;
        self.classifier = RiskClassifier::from_config(&config);
        self.config = config;
        Ok(())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
