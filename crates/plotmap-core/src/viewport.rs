//! User-applied pan/zoom state, independent of the fit transform.

/// Zoom clamp range.
pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;

/// Wheel zoom steps (per notch).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Button/keyboard zoom steps.
pub const STEP_ZOOM_OUT: f64 = 0.8;
pub const STEP_ZOOM_IN: f64 = 1.2;

/// Keyboard pan step in screen pixels.
pub const KEY_PAN_STEP: f64 = 50.0;

/// Pan offset and zoom scale applied on top of the fit transform. Offsets are
/// unbounded; any position is recoverable via [`ViewportState::reset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub is_panning: bool,
    /// Drag anchor: pointer position minus the offset at drag start.
    pub drag_start: Option<(f64, f64)>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            is_panning: false,
            drag_start: None,
        }
    }
}

impl ViewportState {
    /// Multiply the zoom scale by `factor`, clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub fn zoom_by(&mut self, factor: f64) {
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(STEP_ZOOM_IN);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(STEP_ZOOM_OUT);
    }

    /// Start a drag: the anchor is the pointer position minus the current
    /// offset, so the offset can be recomputed absolutely on every move.
    pub fn begin_drag(&mut self, pointer_x: f64, pointer_y: f64) {
        self.is_panning = true;
        self.drag_start = Some((pointer_x - self.offset_x, pointer_y - self.offset_y));
    }

    /// Continue a drag: offset = pointer minus anchor, recomputed rather than
    /// accumulated, so repeated moves cannot drift.
    pub fn drag_to(&mut self, pointer_x: f64, pointer_y: f64) {
        if let Some((ax, ay)) = self.drag_start {
            self.offset_x = pointer_x - ax;
            self.offset_y = pointer_y - ay;
        }
    }

    pub fn end_drag(&mut self) {
        self.is_panning = false;
        self.drag_start = None;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn pan_to(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Back to scale 1, offset (0,0). Transient drag state is cleared too.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
