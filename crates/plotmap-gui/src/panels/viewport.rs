use plotmap_core::geometry::{hit_test, ComposedTransform, FitTransform, HIT_RADIUS};
use plotmap_core::render::{
    plan_markers, MarkerDraw, LABEL_FONT_SIZE, MARKER_BORDER_WIDTH, MARKER_RADIUS, RING_COLOR,
    RING_RADIUS, RING_STROKE_WIDTH,
};
use plotmap_core::viewport::{KEY_PAN_STEP, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};

use crate::app::PlotMapApp;

pub fn show(ctx: &egui::Context, app: &mut PlotMapApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        // Image decode failure suppresses the interactive surface entirely.
        if let Some(message) = app.ui_state.image_error.clone() {
            show_image_error(ui, app, &message);
            return;
        }

        let texture_info = app.view.texture.as_ref().map(|t| t.id()).zip(app.view.natural_size);
        let Some((texture_id, natural)) = texture_info else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        handle_pan(&response, rect, app);
        handle_wheel(ui, &response, app);
        handle_keyboard(ctx, app);

        let fit = FitTransform::fit(
            natural[0] as f64,
            natural[1] as f64,
            rect.width() as f64,
            rect.height() as f64,
        );
        let transform = ComposedTransform::new(
            fit,
            &app.view.viewport,
            rect.width() as f64,
            rect.height() as f64,
        );

        // A click only fires when no drag occurred, so a pan release is
        // never misread as a selection.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                handle_click(app, &fit, &transform, local.x as f64, local.y as f64);
            }
        }

        draw_image(ui, texture_id, rect, &transform);
        draw_markers(ui, rect, app, &transform);

        if app.view.viewport.is_panning {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Grab);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Drag semantics: anchor on press, offset recomputed absolutely on every
/// move (pointer minus anchor), so continuous drags cannot drift.
fn handle_pan(response: &egui::Response, rect: egui::Rect, app: &mut PlotMapApp) {
    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            app.view.viewport.begin_drag(local.x as f64, local.y as f64);
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            app.view.viewport.drag_to(local.x as f64, local.y as f64);
        }
    }
    if response.drag_stopped() {
        app.view.viewport.end_drag();
    }
}

/// Wheel zoom, one discrete step per frame (egui batches events per frame,
/// which caps the processing rate). Pivot is the image center, not the
/// cursor.
fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut PlotMapApp) {
    if !response.hovered() {
        return;
    }
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta > 0.0 {
        app.view.viewport.zoom_by(WHEEL_ZOOM_IN);
    } else if scroll_delta < 0.0 {
        app.view.viewport.zoom_by(WHEEL_ZOOM_OUT);
    }
}

/// Arrow keys pan by a fixed step, +/- zoom by the discrete factors, 0
/// resets. Skipped while a text field owns the keyboard.
fn handle_keyboard(ctx: &egui::Context, app: &mut PlotMapApp) {
    if ctx.wants_keyboard_input() {
        return;
    }
    let viewport = &mut app.view.viewport;
    ctx.input(|i| {
        if i.key_pressed(egui::Key::ArrowUp) {
            viewport.pan_by(0.0, KEY_PAN_STEP);
        }
        if i.key_pressed(egui::Key::ArrowDown) {
            viewport.pan_by(0.0, -KEY_PAN_STEP);
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            viewport.pan_by(KEY_PAN_STEP, 0.0);
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            viewport.pan_by(-KEY_PAN_STEP, 0.0);
        }
        if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
            viewport.zoom_in();
        }
        if i.key_pressed(egui::Key::Minus) {
            viewport.zoom_out();
        }
        if i.key_pressed(egui::Key::Num0) {
            viewport.reset();
        }
    });
}

/// Inverse-map the click through the viewport, then nearest-within-radius
/// against the fit-mapped markers. A miss silently clears the selection.
fn handle_click(
    app: &mut PlotMapApp,
    fit: &FitTransform,
    transform: &ComposedTransform,
    sx: f64,
    sy: f64,
) {
    let (cx, cy) = transform.screen_to_container(sx, sy);
    match hit_test(app.store.plots(), fit, cx, cy, HIT_RADIUS) {
        Some(index) => app.select_plot(index),
        None => app.selection.clear(),
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, rect: egui::Rect, transform: &ComposedTransform) {
    let (left, top, w, h) = transform.image_rect();
    let img_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(left as f32, top as f32),
        egui::vec2(w as f32, h as f32),
    );
    ui.painter().with_clip_rect(rect).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Paint the marker plan. Marker metrics scale with the zoom factor so the
/// overlay tracks the image exactly, matching the transform applied to the
/// base texture.
fn draw_markers(ui: &egui::Ui, rect: egui::Rect, app: &PlotMapApp, transform: &ComposedTransform) {
    let plan = plan_markers(
        app.store.plots(),
        transform,
        &app.selection,
        rect.width() as f64,
        rect.height() as f64,
    );
    if plan.is_empty() {
        return;
    }

    let painter = ui.painter().with_clip_rect(rect);
    let zoom = app.view.viewport.scale as f32;
    for marker in &plan {
        draw_marker(&painter, rect, marker, zoom);
    }
}

fn draw_marker(painter: &egui::Painter, rect: egui::Rect, marker: &MarkerDraw, zoom: f32) {
    let center = rect.min + egui::vec2(marker.x as f32, marker.y as f32);
    let [r, g, b] = marker.color;

    if marker.highlighted {
        let gold = egui::Color32::from_rgba_unmultiplied(
            RING_COLOR[0],
            RING_COLOR[1],
            RING_COLOR[2],
            RING_COLOR[3],
        );
        painter.circle_stroke(
            center,
            RING_RADIUS * zoom,
            egui::Stroke::new(RING_STROKE_WIDTH * zoom, gold),
        );
    }

    painter.circle_filled(center, MARKER_RADIUS * zoom, egui::Color32::from_rgb(r, g, b));
    painter.circle_stroke(
        center,
        MARKER_RADIUS * zoom,
        egui::Stroke::new(MARKER_BORDER_WIDTH * zoom, egui::Color32::WHITE),
    );

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        &marker.label,
        egui::FontId::proportional((LABEL_FONT_SIZE * zoom).max(1.0)),
        egui::Color32::WHITE,
    );
}

fn show_image_error(ui: &mut egui::Ui, app: &mut PlotMapApp, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 40.0);
        ui.label(
            egui::RichText::new(message)
                .size(16.0)
                .color(egui::Color32::LIGHT_RED),
        );
        ui.add_space(8.0);
        if ui.button("Retry").clicked() {
            app.retry_image();
        }
    });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 30.0);
        ui.add(egui::Spinner::new().size(24.0));
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Loading map image...")
                .size(16.0)
                .color(egui::Color32::from_gray(120)),
        );
    });
}
