//! Offline calibration of stored plot coordinates: affine correction,
//! per-plot overrides, and linear interpolation between known anchors.
//! These run outside the live session and consume/produce the same JSON
//! shape as the viewer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plot::PlotRecord;
use crate::store::canonical_key;

/// Affine correction applied to every plot's normalized coordinates:
/// `(x, y) -> (x * scale_x + offset_x, y * scale_y + offset_y)`, then
/// clamped back into `[0, 1]`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Correction {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Correction {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Shift all plots slightly up and left.
pub const GENERAL_SHIFT: Correction = Correction {
    offset_x: -0.02,
    offset_y: -0.02,
    scale_x: 1.0,
    scale_y: 1.0,
};

/// Compress horizontally, expand vertically.
pub const ASPECT_CORRECTION: Correction = Correction {
    offset_x: 0.0,
    offset_y: 0.0,
    scale_x: 0.95,
    scale_y: 1.05,
};

/// Major repositioning, for when the map layout shifted significantly.
pub const MAJOR_SHIFT: Correction = Correction {
    offset_x: -0.05,
    offset_y: -0.03,
    scale_x: 0.98,
    scale_y: 1.02,
};

/// Exact coordinates for one known plot, keyed by its display label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalibrationPoint {
    #[serde(rename = "plotNumber")]
    pub plot_number: String,
    pub x: f64,
    pub y: f64,
}

pub fn apply_global_correction(records: &mut [PlotRecord], correction: &Correction) {
    for record in records.iter_mut() {
        record.x = (record.x * correction.scale_x + correction.offset_x).clamp(0.0, 1.0);
        record.y = (record.y * correction.scale_y + correction.offset_y).clamp(0.0, 1.0);
    }
}

/// Replace positions of plots named in the calibration list. Lookup is
/// prefix-tolerant, matching the viewer's search index. Returns how many
/// plots were updated.
pub fn apply_overrides(records: &mut [PlotRecord], points: &[CalibrationPoint]) -> usize {
    use std::collections::HashMap;

    let mut map: HashMap<String, &CalibrationPoint> = HashMap::new();
    for point in points {
        map.insert(canonical_key(&point.plot_number), point);
    }

    let mut applied = 0;
    for record in records.iter_mut() {
        if let Some(point) = map.get(&canonical_key(&record.number)) {
            record.x = point.x;
            record.y = point.y;
            applied += 1;
        }
    }
    debug!(applied, total = records.len(), "calibration overrides applied");
    applied
}

fn numeric_label(label: &str) -> Option<i64> {
    canonical_key(label).parse().ok()
}

/// Linearly interpolate positions between known anchors, ordered by numeric
/// plot label. Plots matching an anchor exactly take the anchor's position;
/// plots between two anchors are placed proportionally by label; plots
/// outside the anchor range (or with non-numeric labels) keep their
/// position. Fewer than two anchors is a no-op.
pub fn interpolate_positions(records: &mut [PlotRecord], anchors: &[CalibrationPoint]) {
    let mut sorted: Vec<(i64, &CalibrationPoint)> = anchors
        .iter()
        .filter_map(|a| numeric_label(&a.plot_number).map(|n| (n, a)))
        .collect();
    if sorted.len() < 2 {
        return;
    }
    sorted.sort_by_key(|(n, _)| *n);

    for record in records.iter_mut() {
        let Some(num) = numeric_label(&record.number) else {
            continue;
        };

        if let Some((_, exact)) = sorted.iter().find(|(n, _)| *n == num) {
            record.x = exact.x;
            record.y = exact.y;
            continue;
        }

        let before = sorted.iter().rev().find(|(n, _)| *n < num);
        let after = sorted.iter().find(|(n, _)| *n > num);
        if let (Some((bn, bp)), Some((an, ap))) = (before, after) {
            let ratio = (num - bn) as f64 / (an - bn) as f64;
            record.x = bp.x + (ap.x - bp.x) * ratio;
            record.y = bp.y + (ap.y - bp.y) * ratio;
        }
    }
}
