use tracing::debug;
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::types::Raster;
use crate::image_pipeline::raster::reader::RasterReader;
use crate::image_pipeline::raster::image_reader::StandardImageReader;
use crate::image_pipeline::raster::rawloader_reader::RawLoaderReader;

/// Tries the standard image decoders first, then falls back to RAW decoding.
pub struct AutoRasterReader;

impl RasterReader for AutoRasterReader {
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        let standard_err = match StandardImageReader.read_raster(data) {
            Ok(raster) => return Ok(raster),
            Err(AnalysisError::DecodeError(msg)) => msg,
            Err(e) => return Err(e),
        };

        debug!("Standard decoders rejected input ({}), trying RAW", standard_err);

        match RawLoaderReader.read_raster(data) {
            Err(AnalysisError::DecodeError(raw_err)) => Err(AnalysisError::DecodeError(format!(
                "not a supported image ({}) nor a RAW file ({})",
                standard_err, raw_err
            ))),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat};
    use std::io::Cursor;

    #[test]
    fn decodes_standard_images() {
        let gray = GrayImage::from_raw(1, 2, vec![7, 9]).unwrap();
        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(gray)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let raster = AutoRasterReader.read_raster(&bytes).unwrap();
        assert_eq!(raster.samples(), &[7, 9]);
    }

    #[test]
    fn reports_both_failures() {
        let err = AutoRasterReader.read_raster(b"garbage").unwrap_err();
        match err {
            AnalysisError::DecodeError(msg) => assert!(msg.contains("RAW")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
