//! Raster reading module
//!
//! This module turns encoded image bytes into single-channel brightness rasters.

mod reader;
mod image_reader;
mod rawloader_reader;
mod auto_reader;
pub mod types;

pub use reader::RasterReader;
pub use image_reader::{StandardImageReader, luma_from_rgb};
pub use rawloader_reader::RawLoaderReader;
pub use auto_reader::AutoRasterReader;
pub use types::{Raster, HighlightedRaster};
