pub mod calibrate;
pub mod correct;
pub mod info;
pub mod interpolate;

use std::path::Path;

use anyhow::{Context, Result};
use plotmap_core::calibrate::CalibrationPoint;

/// Load a calibration point list (`[{ "plotNumber": "...", "x": ..., "y": ... }]`).
pub fn load_calibration_points(path: &Path) -> Result<Vec<CalibrationPoint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading calibration file {}", path.display()))?;
    let points: Vec<CalibrationPoint> =
        serde_json::from_str(&content).with_context(|| "parsing calibration file")?;
    Ok(points)
}
