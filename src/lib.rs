//! Flags thermally risky pixels in grayscale images.
//!
//! Brightness is rescaled onto a 0-100 pseudo-temperature relative to the
//! image's own darkest and brightest pixels; a pixel is risky when both its
//! pseudo-temperature and its raw brightness reach configured thresholds.

pub mod image_pipeline;
pub mod interactive;
pub mod logger;
