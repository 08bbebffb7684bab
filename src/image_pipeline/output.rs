//! Result output module
//!
//! This module persists the risk coordinate list as text and the highlighted
//! raster as a PNG or TIFF image.

mod writer;
mod png_writer;
mod standard_tiff_writer;
mod coordinates;
mod sink;
mod file_sink;
pub mod types;

pub use writer::HighlightWriter;
pub use png_writer::PngHighlightWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use coordinates::{coordinates_file_name, format_risk_point, write_coordinates};
pub use sink::ResultSink;
pub use file_sink::{FileResultSink, image_file_name};
pub use types::{OutputConfig, OutputConfigBuilder, OutputFormat, TiffCompression};
