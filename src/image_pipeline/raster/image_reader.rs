//! Raster reader for standard image formats (PNG, JPEG, BMP, TIFF, ...) backed
//! by the `image` crate.
//!
//! Color images are reduced to brightness with the ITU-R 601-2 luma transform,
//! using the same fixed-point weights as common grayscale conversions so that
//! results are reproducible across tools. Alpha is ignored.

use tracing::debug;
use image::DynamicImage;
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::raster::reader::RasterReader;

/// Reader for every format the `image` crate can decode.
pub struct StandardImageReader;

/// 16.16 fixed-point luma weights; they sum to 65536.
const LUMA_RED: u32 = 19595;
const LUMA_GREEN: u32 = 38470;
const LUMA_BLUE: u32 = 7471;
const LUMA_ROUNDING: u32 = 0x8000;

/// Brightness of one RGB pixel.
pub fn luma_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_RED + g as u32 * LUMA_GREEN + b as u32 * LUMA_BLUE + LUMA_ROUNDING) >> 16) as u8
}

impl RasterReader for StandardImageReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        debug!("Decoded image: {}x{} ({:?})", width, height, decoded.color());

        let samples: Vec<u8> = match decoded {
            DynamicImage::ImageLuma8(buffer) => buffer.into_raw(),
            DynamicImage::ImageLumaA8(buffer) => {
                buffer.into_raw().chunks_exact(2).map(|px| px[0]).collect()
            }
            other => other
                .to_rgb8()
                .pixels()
                .map(|px| luma_from_rgb(px[0], px[1], px[2]))
                .collect(),
        };

        Raster::new(width, height, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, RgbImage};
    use std::io::Cursor;

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn luma_weights_cover_full_range() {
        assert_eq!(luma_from_rgb(0, 0, 0), 0);
        assert_eq!(luma_from_rgb(255, 255, 255), 255);
        assert_eq!(luma_from_rgb(255, 0, 0), 76);
        assert_eq!(luma_from_rgb(0, 255, 0), 150);
        assert_eq!(luma_from_rgb(0, 0, 255), 29);
    }

    #[test]
    fn grayscale_png_passes_through() {
        let gray = GrayImage::from_raw(2, 2, vec![0, 128, 200, 255]).unwrap();
        let bytes = encode_png(DynamicImage::ImageLuma8(gray));

        let raster = StandardImageReader.read_raster(&bytes).unwrap();

        assert_eq!(raster.width(), 2);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.samples(), &[0, 128, 200, 255]);
    }

    #[test]
    fn color_png_is_converted_to_luma() {
        let rgb = RgbImage::from_raw(3, 1, vec![255, 0, 0, 0, 255, 0, 40, 40, 40]).unwrap();
        let bytes = encode_png(DynamicImage::ImageRgb8(rgb));

        let raster = StandardImageReader.read_raster(&bytes).unwrap();

        assert_eq!(raster.samples(), &[76, 150, 40]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let result = StandardImageReader.read_raster(b"definitely not an image");
        assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
    }
}
