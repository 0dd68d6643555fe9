use approx::assert_relative_eq;

use plotmap_core::geometry::{hit_test, ComposedTransform, FitTransform, HIT_RADIUS};
use plotmap_core::plot::{Plot, DEFAULT_PLOT_COLOR};
use plotmap_core::viewport::ViewportState;

fn plot(number: &str, x: f64, y: f64) -> Plot {
    Plot {
        id: 0,
        number: number.to_string(),
        size: String::new(),
        color: DEFAULT_PLOT_COLOR.to_string(),
        x,
        y,
    }
}

#[test]
fn test_fit_wide_container_letterboxes_horizontally() {
    // Tall image in a wide container: height-limited, centered horizontally.
    let fit = FitTransform::fit(1000.0, 2000.0, 800.0, 600.0);

    assert_relative_eq!(fit.display_scale, 0.3);
    assert_relative_eq!(fit.display_width, 300.0);
    assert_relative_eq!(fit.display_height, 600.0);
    assert_relative_eq!(fit.img_left, 250.0);
    assert_relative_eq!(fit.img_top, 0.0);
}

#[test]
fn test_fit_invariant_various_sizes() {
    let cases = [
        (9283.0, 14028.0, 1280.0, 800.0),
        (100.0, 100.0, 50.0, 200.0),
        (640.0, 480.0, 640.0, 480.0),
        (3000.0, 1000.0, 800.0, 600.0),
    ];
    for (nw, nh, cw, ch) in cases {
        let fit = FitTransform::fit(nw, nh, cw, ch);
        let expected = (cw / nw).min(ch / nh);
        assert_relative_eq!(fit.display_scale, expected);
        // Scaled image fits inside the container, centered.
        assert!(fit.img_left >= -1e-9);
        assert!(fit.img_top >= -1e-9);
        assert!(fit.img_left + fit.display_width <= cw + 1e-9);
        assert!(fit.img_top + fit.display_height <= ch + 1e-9);
        assert_relative_eq!(fit.img_left * 2.0 + fit.display_width, cw, epsilon = 1e-9);
        assert_relative_eq!(fit.img_top * 2.0 + fit.display_height, ch, epsilon = 1e-9);
    }
}

#[test]
fn test_fit_degenerate_sizes_do_not_produce_nan() {
    let fit = FitTransform::fit(0.0, 0.0, 800.0, 600.0);
    assert_eq!(fit.display_width, 0.0);
    assert_eq!(fit.display_height, 0.0);
    assert!(fit.to_normalized(100.0, 100.0).is_none());
}

#[test]
fn test_forward_and_inverse_mapping_round_trip() {
    let fit = FitTransform::fit(2000.0, 1000.0, 800.0, 600.0);
    let (cx, cy) = fit.to_container(0.25, 0.75);
    let (x, y) = fit.to_normalized(cx, cy).unwrap();
    assert_relative_eq!(x, 0.25, epsilon = 1e-12);
    assert_relative_eq!(y, 0.75, epsilon = 1e-12);
}

#[test]
fn test_hit_test_round_trip_at_exact_position() {
    // A click exactly at a plot's forward-mapped position must return that
    // plot (distance 0 <= radius).
    let fit = FitTransform::fit(9283.0, 14028.0, 1024.0, 768.0);
    let plots = vec![
        plot("Plot 1", 0.1, 0.1),
        plot("Plot 2", 0.5, 0.5),
        plot("Plot 3", 0.9, 0.9),
    ];
    for (i, p) in plots.iter().enumerate() {
        let (cx, cy) = fit.to_container(p.x, p.y);
        assert_eq!(hit_test(&plots, &fit, cx, cy, HIT_RADIUS), Some(i));
    }
}

#[test]
fn test_hit_test_rejects_clicks_outside_radius() {
    let fit = FitTransform::fit(1000.0, 1000.0, 500.0, 500.0);
    let plots = vec![plot("1", 0.5, 0.5)];
    let (cx, cy) = fit.to_container(0.5, 0.5);

    // Just inside the radius.
    assert_eq!(hit_test(&plots, &fit, cx + 11.9, cy, HIT_RADIUS), Some(0));
    // Just outside: empty space deselects instead of snapping to a far plot.
    assert_eq!(hit_test(&plots, &fit, cx + 12.1, cy, HIT_RADIUS), None);
}

#[test]
fn test_hit_test_picks_nearest_of_overlapping_plots() {
    let fit = FitTransform::fit(1000.0, 1000.0, 1000.0, 1000.0);
    let plots = vec![plot("a", 0.500, 0.5), plot("b", 0.505, 0.5)];
    let (cx, cy) = fit.to_container(0.504, 0.5);
    assert_eq!(hit_test(&plots, &fit, cx, cy, HIT_RADIUS), Some(1));
}

#[test]
fn test_composed_transform_identity_viewport_matches_fit() {
    let fit = FitTransform::fit(2000.0, 1000.0, 800.0, 600.0);
    let viewport = ViewportState::default();
    let composed = ComposedTransform::new(fit, &viewport, 800.0, 600.0);

    let (fx, fy) = fit.to_container(0.3, 0.6);
    let (sx, sy) = composed.to_screen(0.3, 0.6);
    assert_relative_eq!(sx, fx);
    assert_relative_eq!(sy, fy);
}

#[test]
fn test_composed_transform_scales_about_container_center() {
    let fit = FitTransform::fit(800.0, 600.0, 800.0, 600.0);
    let mut viewport = ViewportState::default();
    viewport.zoom_by(2.0);
    let composed = ComposedTransform::new(fit, &viewport, 800.0, 600.0);

    // The container center is the pivot: it maps to itself.
    let (sx, sy) = composed.container_to_screen(400.0, 300.0);
    assert_relative_eq!(sx, 400.0);
    assert_relative_eq!(sy, 300.0);

    // A point 100px right of center lands 200px right of center at 2x.
    let (sx, sy) = composed.container_to_screen(500.0, 300.0);
    assert_relative_eq!(sx, 600.0);
    assert_relative_eq!(sy, 300.0);
}

#[test]
fn test_composed_inverse_recovers_container_position() {
    let fit = FitTransform::fit(2000.0, 1500.0, 900.0, 700.0);
    let mut viewport = ViewportState::default();
    viewport.zoom_by(1.7);
    viewport.pan_by(-120.0, 45.0);
    let composed = ComposedTransform::new(fit, &viewport, 900.0, 700.0);

    let (sx, sy) = composed.container_to_screen(123.0, 456.0);
    let (cx, cy) = composed.screen_to_container(sx, sy);
    assert_relative_eq!(cx, 123.0, epsilon = 1e-9);
    assert_relative_eq!(cy, 456.0, epsilon = 1e-9);
}

#[test]
fn test_image_rect_tracks_pan_and_zoom() {
    let fit = FitTransform::fit(400.0, 400.0, 800.0, 600.0);
    let mut viewport = ViewportState::default();
    viewport.pan_by(10.0, -20.0);
    let composed = ComposedTransform::new(fit, &viewport, 800.0, 600.0);

    let (left, top, w, h) = composed.image_rect();
    assert_relative_eq!(w, fit.display_width);
    assert_relative_eq!(h, fit.display_height);
    assert_relative_eq!(left, fit.img_left + 10.0);
    assert_relative_eq!(top, fit.img_top - 20.0);
}
