//! Raster data types

use crate::image_pipeline::common::error::{AnalysisError, Result};

/// Single-channel brightness raster, row-major, one `u8` sample per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Builds a raster from row-major samples.
    ///
    /// Fails with [`AnalysisError::InvalidDimensions`] when `data` does not hold
    /// exactly `width * height` samples. Zero-area rasters are accepted here;
    /// they are rejected later when a brightness range is requested.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        match width.checked_mul(height) {
            Some(len) if len == data.len() => Ok(Self {
                width,
                height,
                data,
            }),
            _ => Err(AnalysisError::InvalidDimensions(width, height)),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Iterates `(x, y, brightness)` in row-major scan order.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &b)| (i % width, i / width, b))
    }
}

/// RGB raster produced by classification, flagged pixels recolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedRaster {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl HighlightedRaster {
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 3;
        self.data
            .get(offset..offset + 3)
            .map(|px| [px[0], px[1], px[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let result = Raster::new(3, 2, vec![0; 5]);
        assert!(matches!(result, Err(AnalysisError::InvalidDimensions(3, 2))));
    }

    #[test]
    fn accepts_zero_area() {
        let raster = Raster::new(0, 4, Vec::new()).unwrap();
        assert!(raster.is_empty());
        assert_eq!(raster.pixels().count(), 0);
    }

    #[test]
    fn pixels_follow_row_major_order() {
        let raster = Raster::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        let visited: Vec<_> = raster.pixels().collect();
        assert_eq!(visited, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]);
        assert_eq!(raster.get(1, 1), Some(4));
        assert_eq!(raster.get(2, 0), None);
    }
}
