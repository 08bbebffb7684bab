use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::HighlightedRaster;
use crate::image_pipeline::output::types::{OutputConfig, TiffCompression};
use crate::image_pipeline::output::writer::HighlightWriter;

pub struct StandardTiffWriter;

impl HighlightWriter for StandardTiffWriter {
    fn write_image(&self, image: &HighlightedRaster, output: &mut dyn Write, config: &OutputConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);

        // TiffEncoder needs Seek, encode into memory first
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| AnalysisError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder.write_image::<tiff::encoder::colortype::RGB8>(
            image.width as u32,
            image.height as u32,
            &image.data,
        ).map_err(|e| AnalysisError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tiff::decoder::{Decoder, DecodingResult};

    fn sample_raster() -> HighlightedRaster {
        HighlightedRaster {
            width: 3,
            height: 2,
            data: vec![
                255, 10, 0, 20, 20, 20, 30, 30, 30,
                40, 40, 40, 255, 10, 0, 60, 60, 60,
            ],
        }
    }

    fn decode(bytes: Vec<u8>) -> (u32, u32, Vec<u8>) {
        let mut decoder = Decoder::new(Cursor::new(bytes)).unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        match decoder.read_image().unwrap() {
            DecodingResult::U8(data) => (width, height, data),
            _ => panic!("expected 8-bit samples"),
        }
    }

    #[test]
    fn uncompressed_tiff_keeps_pixels() {
        let raster = sample_raster();
        let mut bytes = Vec::new();

        StandardTiffWriter
            .write_image(&raster, &mut bytes, &OutputConfig::default())
            .unwrap();

        assert_eq!(decode(bytes), (3, 2, raster.data));
    }

    #[test]
    fn compressed_tiff_keeps_pixels() {
        let raster = sample_raster();
        for compression in [TiffCompression::Lzw, TiffCompression::DeflateBalanced] {
            let config = OutputConfig::builder()
                .compression(compression)
                .predictor(Some(2))
                .build();
            let mut bytes = Vec::new();

            StandardTiffWriter.write_image(&raster, &mut bytes, &config).unwrap();

            assert_eq!(decode(bytes), (3, 2, raster.data.clone()));
        }
    }
}
