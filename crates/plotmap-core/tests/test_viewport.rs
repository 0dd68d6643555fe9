use approx::assert_relative_eq;

use plotmap_core::viewport::{ViewportState, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};

#[test]
fn test_zoom_clamps_at_both_ends() {
    let mut v = ViewportState::default();
    for _ in 0..100 {
        v.zoom_by(WHEEL_ZOOM_IN);
    }
    assert_relative_eq!(v.scale, MAX_SCALE);

    for _ in 0..200 {
        v.zoom_by(WHEEL_ZOOM_OUT);
    }
    assert_relative_eq!(v.scale, MIN_SCALE);

    // Clamp is idempotent: one more step changes nothing.
    v.zoom_by(WHEEL_ZOOM_OUT);
    assert_relative_eq!(v.scale, MIN_SCALE);
}

#[test]
fn test_reset_from_any_state() {
    let mut v = ViewportState::default();
    v.zoom_by(3.0);
    v.pan_by(500.0, -900.0);
    v.begin_drag(10.0, 10.0);

    v.reset();
    assert_relative_eq!(v.scale, 1.0);
    assert_relative_eq!(v.offset_x, 0.0);
    assert_relative_eq!(v.offset_y, 0.0);
    assert!(!v.is_panning);
    assert!(v.drag_start.is_none());
}

#[test]
fn test_drag_offset_is_pointer_minus_anchor() {
    let mut v = ViewportState::default();
    v.pan_to(30.0, 40.0);

    v.begin_drag(100.0, 100.0);
    assert!(v.is_panning);

    v.drag_to(150.0, 90.0);
    assert_relative_eq!(v.offset_x, 80.0);
    assert_relative_eq!(v.offset_y, 30.0);
}

#[test]
fn test_drag_recomputes_absolutely_without_drift() {
    let mut v = ViewportState::default();
    v.begin_drag(0.0, 0.0);

    // Many intermediate moves ending where a single move would end.
    for i in 1..=1000 {
        v.drag_to(i as f64 * 0.25, i as f64 * -0.5);
    }
    assert_relative_eq!(v.offset_x, 250.0);
    assert_relative_eq!(v.offset_y, -500.0);

    v.end_drag();
    assert!(!v.is_panning);
    assert!(v.drag_start.is_none());

    // Moves after release are ignored.
    v.drag_to(9999.0, 9999.0);
    assert_relative_eq!(v.offset_x, 250.0);
}

#[test]
fn test_keyboard_pan_accumulates() {
    let mut v = ViewportState::default();
    v.pan_by(50.0, 0.0);
    v.pan_by(50.0, 0.0);
    v.pan_by(0.0, -50.0);
    assert_relative_eq!(v.offset_x, 100.0);
    assert_relative_eq!(v.offset_y, -50.0);
}

#[test]
fn test_step_zoom_buttons() {
    let mut v = ViewportState::default();
    v.zoom_in();
    assert_relative_eq!(v.scale, 1.2);
    v.zoom_out();
    assert_relative_eq!(v.scale, 0.96);
}
