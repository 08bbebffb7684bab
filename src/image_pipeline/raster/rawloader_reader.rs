//! RAW image reader implementation using the rawloader library.
//!
//! This module provides support for reading camera RAW formats (ARW, CR2, NEF, DNG, etc.)
//! as brightness rasters. Sensor values are reduced from the sensor's native bit depth to
//! the 8-bit brightness scale the classifier works on.

use std::io::Cursor;

use tracing::debug;
use rawloader::RawImageData as RawloaderImageData;
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::raster::reader::RasterReader;

/// RAW image reader that uses the rawloader library for decoding.
///
/// Mosaic data is read as-is (one sample per photosite, no debayering); files that
/// carry several components per pixel are averaged into one brightness value.
pub struct RawLoaderReader;

/// Default bit depth when no white level information is available from the RAW file.
const DEFAULT_BITS_PER_SAMPLE: u32 = 16;

/// The bit width of the u16 data type, used for calculating actual bits per sample.
const U16_BITS: u32 = 16;

const BRIGHTNESS_BITS: u32 = 8;

impl RasterReader for RawLoaderReader {
    /// Reads and decodes RAW image data from a byte array.
    ///
    /// # Returns
    ///
    /// * `Ok(Raster)` - Decoded brightness raster, one sample per pixel
    /// * `Err(AnalysisError::DecodeError)` - rawloader could not decode the bytes
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding RAW image, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let width = decoded.width;
        let height = decoded.height;
        let cpp = decoded.cpp.max(1);

        debug!("Decoded RAW image: {}x{}, {} component(s) per pixel", width, height, cpp);

        // Float data is normalized 0.0-1.0, scale it to the u16 range
        let values: Vec<u16> = match decoded.data {
            RawloaderImageData::Integer(values) => values,
            RawloaderImageData::Float(values) => values
                .iter()
                .map(|&v| (v.clamp(0.0, 1.0) * u16::MAX as f32) as u16)
                .collect(),
        };

        let max_white_level = decoded.whitelevels.iter().max().copied().unwrap_or(u16::MAX);
        let bits_per_sample = bits_from_white_level(max_white_level);

        debug!("Calculated bits_per_sample: {} (max white level: {})", bits_per_sample, max_white_level);

        Raster::new(width, height, to_brightness(&values, cpp, bits_per_sample))
    }
}

/// Minimum number of bits needed to represent the sensor's white level,
/// e.g. 4095 -> 12 bits, 16383 -> 14 bits.
fn bits_from_white_level(white_level: u16) -> u32 {
    if white_level == 0 {
        DEFAULT_BITS_PER_SAMPLE
    } else {
        U16_BITS - white_level.leading_zeros()
    }
}

/// Averages `cpp` components per pixel and rescales to 8 bits.
fn to_brightness(values: &[u16], cpp: usize, bits_per_sample: u32) -> Vec<u8> {
    let shift = bits_per_sample.saturating_sub(BRIGHTNESS_BITS);
    values
        .chunks_exact(cpp)
        .map(|components| {
            let sum: u32 = components.iter().map(|&v| v as u32).sum();
            let mean = sum / cpp as u32;
            (mean >> shift).min(u8::MAX as u32) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_depth_from_white_level() {
        assert_eq!(bits_from_white_level(4095), 12);
        assert_eq!(bits_from_white_level(16383), 14);
        assert_eq!(bits_from_white_level(u16::MAX), 16);
        assert_eq!(bits_from_white_level(0), DEFAULT_BITS_PER_SAMPLE);
    }

    #[test]
    fn twelve_bit_samples_scale_to_brightness() {
        let brightness = to_brightness(&[0, 16, 2048, 4095], 1, 12);
        assert_eq!(brightness, vec![0, 1, 128, 255]);
    }

    #[test]
    fn values_above_white_level_saturate() {
        let brightness = to_brightness(&[8191], 1, 12);
        assert_eq!(brightness, vec![255]);
    }

    #[test]
    fn multi_component_pixels_are_averaged() {
        let brightness = to_brightness(&[10, 20, 30, 200, 200, 200], 3, 8);
        assert_eq!(brightness, vec![20, 200]);
    }

    #[test]
    fn undecodable_bytes_report_decode_error() {
        let result = RawLoaderReader.read_raster(b"not a raw file");
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }
}
