//! Coordinate mapping between normalized plot space, the letterboxed image
//! inside its container, and the user's pan/zoom transform.
//!
//! Every conversion in the viewer passes through [`FitTransform`]; the
//! user-applied pan/zoom composes on top of it via [`ComposedTransform`].

use crate::plot::Plot;
use crate::viewport::ViewportState;

/// Clicks farther than this (in container pixels) from every marker count as
/// a miss and clear the selection.
pub const HIT_RADIUS: f64 = 12.0;

/// Uniform "contain" fit of the natural-size image into its container:
/// aspect-preserving scale plus centering offsets (letterboxing on the
/// non-fitted axis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub display_scale: f64,
    pub display_width: f64,
    pub display_height: f64,
    pub img_left: f64,
    pub img_top: f64,
}

impl FitTransform {
    /// Compute the fit for the given natural image size and container size.
    /// Degenerate (non-positive) sizes collapse to a zero-area fit rather
    /// than producing NaNs downstream.
    pub fn fit(natural_w: f64, natural_h: f64, container_w: f64, container_h: f64) -> Self {
        if natural_w <= 0.0 || natural_h <= 0.0 || container_w <= 0.0 || container_h <= 0.0 {
            return Self {
                display_scale: 0.0,
                display_width: 0.0,
                display_height: 0.0,
                img_left: container_w.max(0.0) / 2.0,
                img_top: container_h.max(0.0) / 2.0,
            };
        }

        let display_scale = (container_w / natural_w).min(container_h / natural_h);
        let display_width = natural_w * display_scale;
        let display_height = natural_h * display_scale;

        Self {
            display_scale,
            display_width,
            display_height,
            img_left: (container_w - display_width) / 2.0,
            img_top: (container_h - display_height) / 2.0,
        }
    }

    /// Forward mapping: normalized plot coordinates to container pixels.
    pub fn to_container(&self, x_norm: f64, y_norm: f64) -> (f64, f64) {
        (
            self.img_left + x_norm * self.display_width,
            self.img_top + y_norm * self.display_height,
        )
    }

    /// Inverse mapping: container pixels back to normalized coordinates.
    /// Returns `None` for a zero-area fit.
    pub fn to_normalized(&self, cx: f64, cy: f64) -> Option<(f64, f64)> {
        if self.display_width <= 0.0 || self.display_height <= 0.0 {
            return None;
        }
        Some((
            (cx - self.img_left) / self.display_width,
            (cy - self.img_top) / self.display_height,
        ))
    }
}

/// Fit transform with the user's pan/zoom composed on top.
///
/// The screen transform is `translate(offset) scale(scale)` pivoting on the
/// container center, matching what is applied to the base image, so markers
/// stay pixel-aligned to the image under pan/zoom.
#[derive(Clone, Copy, Debug)]
pub struct ComposedTransform {
    pub fit: FitTransform,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl ComposedTransform {
    pub fn new(fit: FitTransform, viewport: &ViewportState, container_w: f64, container_h: f64) -> Self {
        Self {
            fit,
            scale: viewport.scale,
            offset_x: viewport.offset_x,
            offset_y: viewport.offset_y,
            center_x: container_w / 2.0,
            center_y: container_h / 2.0,
        }
    }

    /// Normalized plot coordinates to final screen pixels.
    pub fn to_screen(&self, x_norm: f64, y_norm: f64) -> (f64, f64) {
        let (cx, cy) = self.fit.to_container(x_norm, y_norm);
        self.container_to_screen(cx, cy)
    }

    /// Container pixels (fit space) to final screen pixels.
    pub fn container_to_screen(&self, cx: f64, cy: f64) -> (f64, f64) {
        (
            self.center_x + (cx - self.center_x) * self.scale + self.offset_x,
            self.center_y + (cy - self.center_y) * self.scale + self.offset_y,
        )
    }

    /// Inverse of the viewport part only: screen pixels back to fit-space
    /// container pixels, for hit-testing against forward-mapped markers.
    pub fn screen_to_container(&self, sx: f64, sy: f64) -> (f64, f64) {
        (
            (sx - self.offset_x - self.center_x) / self.scale + self.center_x,
            (sy - self.offset_y - self.center_y) / self.scale + self.center_y,
        )
    }

    /// The displayed image rectangle in final screen pixels:
    /// `(left, top, width, height)`.
    pub fn image_rect(&self) -> (f64, f64, f64, f64) {
        let (left, top) = self.container_to_screen(self.fit.img_left, self.fit.img_top);
        (
            left,
            top,
            self.fit.display_width * self.scale,
            self.fit.display_height * self.scale,
        )
    }
}

/// Nearest-within-radius hit test in fit-space container pixels.
///
/// Returns the index of the plot minimizing Euclidean distance to the click,
/// accepted only if that distance is within [`HIT_RADIUS`]; clicks in empty
/// space return `None` instead of snapping to a distant plot.
pub fn hit_test(plots: &[Plot], fit: &FitTransform, cx: f64, cy: f64, radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, plot) in plots.iter().enumerate() {
        let (px, py) = fit.to_container(plot.x, plot.y);
        let dist = ((cx - px).powi(2) + (cy - py).powi(2)).sqrt();
        if dist <= radius && best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}
