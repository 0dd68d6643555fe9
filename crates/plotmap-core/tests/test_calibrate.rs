use approx::assert_relative_eq;

use plotmap_core::calibrate::{
    apply_global_correction, apply_overrides, interpolate_positions, CalibrationPoint, Correction,
    ASPECT_CORRECTION, GENERAL_SHIFT,
};
use plotmap_core::plot::PlotRecord;

fn record(number: &str, x: f64, y: f64) -> PlotRecord {
    PlotRecord {
        number: number.to_string(),
        size: String::new(),
        color: "#ff6b6b".to_string(),
        x,
        y,
    }
}

fn point(number: &str, x: f64, y: f64) -> CalibrationPoint {
    CalibrationPoint {
        plot_number: number.to_string(),
        x,
        y,
    }
}

#[test]
fn test_global_correction_affine() {
    let mut records = vec![record("1", 0.5, 0.5)];
    let correction = Correction {
        offset_x: -0.015,
        offset_y: -0.020,
        scale_x: 0.98,
        scale_y: 1.02,
    };
    apply_global_correction(&mut records, &correction);
    assert_relative_eq!(records[0].x, 0.5 * 0.98 - 0.015);
    assert_relative_eq!(records[0].y, 0.5 * 1.02 - 0.020);
}

#[test]
fn test_global_correction_clamps_to_unit_range() {
    let mut records = vec![record("1", 0.01, 0.99)];
    apply_global_correction(&mut records, &GENERAL_SHIFT);
    assert_relative_eq!(records[0].x, 0.0);
    assert_relative_eq!(records[0].y, 0.97);

    let mut records = vec![record("1", 0.99, 0.99)];
    apply_global_correction(&mut records, &ASPECT_CORRECTION);
    assert!(records[0].y <= 1.0);
}

#[test]
fn test_identity_correction_is_a_noop() {
    let mut records = vec![record("1", 0.3, 0.7)];
    apply_global_correction(&mut records, &Correction::default());
    assert_relative_eq!(records[0].x, 0.3);
    assert_relative_eq!(records[0].y, 0.7);
}

#[test]
fn test_overrides_match_with_and_without_prefix() {
    let mut records = vec![
        record("Plot 5", 0.1, 0.1),
        record("8", 0.2, 0.2),
        record("Plot 9", 0.3, 0.3),
    ];
    // Calibration labels spelled the opposite way round.
    let points = vec![point("5", 0.55, 0.56), point("Plot 8", 0.88, 0.89)];

    let applied = apply_overrides(&mut records, &points);
    assert_eq!(applied, 2);
    assert_relative_eq!(records[0].x, 0.55);
    assert_relative_eq!(records[1].y, 0.89);
    // Unlisted plot untouched.
    assert_relative_eq!(records[2].x, 0.3);
}

#[test]
fn test_interpolation_between_anchors() {
    let mut records = vec![
        record("Plot 10", 0.0, 0.0),
        record("Plot 15", 0.0, 0.0),
        record("Plot 20", 0.0, 0.0),
    ];
    let anchors = vec![point("10", 0.1, 0.2), point("20", 0.3, 0.6)];
    interpolate_positions(&mut records, &anchors);

    // Exact anchors.
    assert_relative_eq!(records[0].x, 0.1);
    assert_relative_eq!(records[2].y, 0.6);
    // Midpoint by label ratio.
    assert_relative_eq!(records[1].x, 0.2);
    assert_relative_eq!(records[1].y, 0.4);
}

#[test]
fn test_interpolation_leaves_out_of_range_plots() {
    let mut records = vec![record("5", 0.42, 0.42), record("25", 0.13, 0.13)];
    let anchors = vec![point("10", 0.1, 0.1), point("20", 0.3, 0.3)];
    interpolate_positions(&mut records, &anchors);
    assert_relative_eq!(records[0].x, 0.42);
    assert_relative_eq!(records[1].x, 0.13);
}

#[test]
fn test_interpolation_requires_two_anchors() {
    let mut records = vec![record("15", 0.5, 0.5)];
    interpolate_positions(&mut records, &[point("10", 0.0, 0.0)]);
    assert_relative_eq!(records[0].x, 0.5);
}

#[test]
fn test_interpolation_skips_non_numeric_labels() {
    let mut records = vec![record("A-3", 0.5, 0.5), record("15", 0.0, 0.0)];
    let anchors = vec![point("10", 0.1, 0.1), point("20", 0.3, 0.3)];
    interpolate_positions(&mut records, &anchors);
    assert_relative_eq!(records[0].x, 0.5);
    assert_relative_eq!(records[1].x, 0.2);
}
