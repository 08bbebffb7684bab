use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::thermal::RiskPoint;

pub fn coordinates_file_name(label: &str) -> String {
    format!("coordinates_temperature_image{}.txt", label)
}

/// `Coordinate: (x, y) - Temperature: t`, temperature to two decimals.
pub fn format_risk_point(point: &RiskPoint) -> String {
    format!(
        "Coordinate: ({}, {}) - Temperature: {:.2}",
        point.x, point.y, point.temperature
    )
}

/// Writes one line per point, preserving the input order.
pub fn write_coordinates(points: &[RiskPoint], output: &mut dyn Write) -> Result<()> {
    for point in points {
        writeln!(output, "{}", format_risk_point(point))?;
    }
    output.flush()?;
    Ok(())
}
