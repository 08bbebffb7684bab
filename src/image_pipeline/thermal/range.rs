use tracing::debug;
use crate::image_pipeline::common::error::{Result, AnalysisError};
use crate::image_pipeline::raster::Raster;

/// Darkest and brightest samples observed in one raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    pub min: u8,
    pub max: u8,
}

impl BrightnessRange {
    /// A flat range has no relatively hot pixels.
    pub fn is_flat(&self) -> bool {
        self.min == self.max
    }

    pub fn span(&self) -> u8 {
        self.max - self.min
    }
}

/// Single pass over every sample collecting the observed extrema.
///
/// Zero-area rasters have no observed values and fail with
/// [`AnalysisError::EmptyInput`].
pub fn scan_brightness_range(raster: &Raster) -> Result<BrightnessRange> {
    if raster.is_empty() {
        return Err(AnalysisError::EmptyInput {
            width: raster.width(),
            height: raster.height(),
        });
    }

    let (min, max) = raster
        .samples()
        .iter()
        .fold((u8::MAX, u8::MIN), |(min, max), &b| (min.min(b), max.max(b)));

    debug!(min, max, "Brightness range scanned");
    Ok(BrightnessRange { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_observed_and_bounding() {
        let samples = vec![37, 12, 250, 99, 12, 180];
        let raster = Raster::new(3, 2, samples.clone()).unwrap();

        let range = scan_brightness_range(&raster).unwrap();

        assert_eq!(range, BrightnessRange { min: 12, max: 250 });
        assert!(samples.iter().all(|&s| range.min <= s && s <= range.max));
        assert!(samples.contains(&range.min));
        assert!(samples.contains(&range.max));
    }

    #[test]
    fn range_does_not_assume_full_scale() {
        let raster = Raster::new(2, 1, vec![40, 60]).unwrap();
        let range = scan_brightness_range(&raster).unwrap();
        assert_eq!((range.min, range.max), (40, 60));
        assert_eq!(range.span(), 20);
    }

    #[test]
    fn uniform_raster_has_flat_range() {
        let raster = Raster::new(4, 3, vec![100; 12]).unwrap();
        let range = scan_brightness_range(&raster).unwrap();
        assert_eq!(range, BrightnessRange { min: 100, max: 100 });
        assert!(range.is_flat());
    }

    #[test]
    fn single_pixel_range() {
        let raster = Raster::new(1, 1, vec![0]).unwrap();
        assert_eq!(
            scan_brightness_range(&raster).unwrap(),
            BrightnessRange { min: 0, max: 0 }
        );
    }

    #[test]
    fn empty_raster_fails_fast() {
        let raster = Raster::new(0, 5, Vec::new()).unwrap();
        let result = scan_brightness_range(&raster);
        assert!(matches!(
            result,
            Err(AnalysisError::EmptyInput { width: 0, height: 5 })
        ));
    }
}
