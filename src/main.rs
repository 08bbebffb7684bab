use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thermal_risk_rs::image_pipeline::{
    AnalysisConfig, AutoRasterReader, FileResultSink, OutputConfig, OutputFormat,
    ThermalRiskPipeline, TiffCompression,
};
use thermal_risk_rs::interactive::{self, IMAGE_CHOICES};
use thermal_risk_rs::logger;

use tracing::{error, info};

#[derive(Parser)]
#[command(name = "thermal-risk")]
#[command(about = "Flag thermally risky pixels in grayscale images")]
#[command(version)]
struct Cli {
    /// Default log filter, overridden by RUST_LOG.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one image and save its coordinates and highlighted image.
    Analyze(AnalyzeArgs),

    /// Pick numbered images (image1.png .. image10.png) from a menu.
    Interactive(InteractiveArgs),
}

#[derive(Debug, Clone, Args)]
struct ThresholdArgs {
    /// Minimum pseudo-temperature (0-100) for a pixel to be flagged.
    #[arg(long, default_value = "80.0")]
    min_temp: f64,

    /// Minimum raw brightness (0-255) for a pixel to be flagged.
    #[arg(long, default_value = "180")]
    min_bright: u8,
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    /// Directory receiving the coordinate file and the highlighted image.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Container for the highlighted image.
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// TIFF compression (ignored for PNG).
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,
}

#[derive(Debug, Clone, Args)]
struct AnalyzeArgs {
    /// Path to the input image.
    #[arg(short, long)]
    input: PathBuf,

    /// Label used in output file names (defaults to the input file stem).
    #[arg(long)]
    label: Option<String>,

    #[command(flatten)]
    thresholds: ThresholdArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
struct InteractiveArgs {
    /// Directory holding image1.png .. image10.png.
    #[arg(long, default_value = ".")]
    image_dir: PathBuf,

    #[command(flatten)]
    thresholds: ThresholdArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Tiff,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Tiff => OutputFormat::Tiff,
        }
    }
}

impl From<CompressionArg> for TiffCompression {
    fn from(value: CompressionArg) -> Self {
        match value {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

type Pipeline = ThermalRiskPipeline<AutoRasterReader, FileResultSink>;

fn build_pipeline(thresholds: &ThresholdArgs, output: &OutputArgs) -> Result<Pipeline> {
    let config = AnalysisConfig::builder()
        .min_temp_threshold(thresholds.min_temp)
        .min_bright_threshold(thresholds.min_bright)
        .build();
    let output_config = OutputConfig::builder()
        .output_dir(output.output_dir.clone())
        .image_format(output.format.into())
        .compression(output.compression.into())
        .build();

    let pipeline = ThermalRiskPipeline::new(config, output_config)
        .context("Invalid analysis configuration")?;

    info!(
        min_temp = pipeline.config().min_temp_threshold,
        min_bright = pipeline.config().min_bright_threshold,
        output_dir = %output.output_dir.display(),
        "Thermal risk pipeline initialized"
    );
    Ok(pipeline)
}

fn default_label(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let pipeline = build_pipeline(&args.thresholds, &args.output)?;
    let label = args.label.unwrap_or_else(|| default_label(&args.input));

    let outcome = pipeline
        .process_file(&args.input, &label)
        .with_context(|| format!("Failed to analyze {}", args.input.display()))?;

    info!(
        min = outcome.report.range.min,
        max = outcome.report.range.max,
        risk_points = outcome.report.risk_count(),
        coordinates = %outcome.artifacts.coordinates_path.display(),
        image = %outcome.artifacts.image_path.display(),
        "Analysis saved"
    );
    Ok(())
}

fn run_interactive(args: InteractiveArgs) -> Result<()> {
    let pipeline = build_pipeline(&args.thresholds, &args.output)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let analyzed = interactive::run_session(&mut input, &mut output, IMAGE_CHOICES, |choice, out| {
        let path = interactive::image_path(&args.image_dir, choice);
        match pipeline.process_file(&path, &choice.to_string()) {
            Ok(outcome) => {
                writeln!(
                    out,
                    "Coordinates of regions exceeding the temperature limit are in '{}'.",
                    outcome.artifacts.coordinates_path.display()
                )?;
                writeln!(
                    out,
                    "The darkest pixel has a brightness of {}, and the brightest pixel has {}.",
                    outcome.report.range.min, outcome.report.range.max
                )?;
                writeln!(
                    out,
                    "Highlighted image saved as '{}'.",
                    outcome.artifacts.image_path.display()
                )
            }
            Err(e) => {
                error!("Analysis of {} failed: {}", path.display(), e);
                writeln!(out, "Could not analyze '{}': {}", path.display(), e)
            }
        }
    })
    .context("Interactive session failed")?;

    info!(analyzed, "Interactive session finished");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_with_default(&cli.log_level);

    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Interactive(args) => run_interactive(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_defaults() {
        let cli = Cli::try_parse_from(["thermal-risk", "analyze", "--input", "image3.png"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.thresholds.min_temp, 80.0);
        assert_eq!(args.thresholds.min_bright, 180);
        assert_eq!(default_label(&args.input), "image3");
    }

    #[test]
    fn rejects_out_of_range_brightness() {
        let result = Cli::try_parse_from([
            "thermal-risk", "analyze", "--input", "a.png", "--min-bright", "300",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_temperature_fails_pipeline_construction() {
        let thresholds = ThresholdArgs { min_temp: 120.0, min_bright: 10 };
        let output = OutputArgs {
            output_dir: PathBuf::from("."),
            format: FormatArg::Png,
            compression: CompressionArg::None,
        };
        assert!(build_pipeline(&thresholds, &output).is_err());
    }
}
