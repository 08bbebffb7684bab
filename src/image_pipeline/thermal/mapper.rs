use crate::image_pipeline::thermal::range::BrightnessRange;

/// Top of the pseudo-temperature scale.
pub const TEMPERATURE_SCALE: f64 = 100.0;

/// Linearly rescales `bright` from `[min, max]` onto `[0, 100]`.
///
/// A flat range maps everything to zero. Samples outside the range are not
/// clamped and produce values outside the scale.
pub fn brightness_to_temperature(bright: u8, min: u8, max: u8) -> f64 {
    if max == min {
        return 0.0;
    }
    let normalized = (bright as f64 - min as f64) / (max as f64 - min as f64);
    normalized * TEMPERATURE_SCALE
}

/// Brightness-to-pseudo-temperature mapping bound to one image's range.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureMapper {
    range: BrightnessRange,
}

impl TemperatureMapper {
    pub fn new(range: BrightnessRange) -> Self {
        Self { range }
    }

    pub fn range(&self) -> BrightnessRange {
        self.range
    }

    pub fn temperature(&self, bright: u8) -> f64 {
        brightness_to_temperature(bright, self.range.min, self.range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_scale_limits() {
        assert_eq!(brightness_to_temperature(30, 30, 200), 0.0);
        assert_eq!(brightness_to_temperature(200, 30, 200), 100.0);
        assert_eq!(brightness_to_temperature(0, 0, 255), 0.0);
        assert_eq!(brightness_to_temperature(255, 0, 255), 100.0);
    }

    #[test]
    fn flat_range_maps_to_zero() {
        for b in [0u8, 17, 100, 255] {
            assert_eq!(brightness_to_temperature(b, 100, 100), 0.0);
        }
    }

    #[test]
    fn mapping_is_monotonic() {
        let mapper = TemperatureMapper::new(BrightnessRange { min: 20, max: 220 });
        let temps: Vec<f64> = (20..=220u8).map(|b| mapper.temperature(b)).collect();
        assert!(temps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn intermediate_values_are_linear() {
        let mapper = TemperatureMapper::new(BrightnessRange { min: 0, max: 255 });
        assert!((mapper.temperature(128) - 50.196).abs() < 1e-3);
        assert!((mapper.temperature(200) - 78.431).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_sample_is_not_clamped() {
        assert!(brightness_to_temperature(10, 50, 150) < 0.0);
        assert!(brightness_to_temperature(200, 50, 150) > TEMPERATURE_SCALE);
    }
}
