//! Per-frame marker planning: working-set selection, visibility culling, and
//! marker geometry. Pure and idempotent; painting is left to the frontend,
//! which consumes the plan verbatim (alternative painters share the same
//! contract).

use crate::geometry::ComposedTransform;
use crate::plot::{parse_hex_color, Plot};

/// Markers whose screen position falls outside the surface grown by this
/// margin are skipped from drawing (not from computation).
pub const CULL_MARGIN: f64 = 20.0;

/// Filled circle radius, in fit-space pixels (scales with zoom on screen).
pub const MARKER_RADIUS: f32 = 6.0;
pub const MARKER_BORDER_WIDTH: f32 = 1.5;

/// Gold highlight ring drawn beneath the highlighted marker.
pub const RING_RADIUS: f32 = 12.0;
pub const RING_STROKE_WIDTH: f32 = 3.0;
pub const RING_COLOR: [u8; 4] = [255, 215, 0, 242];

pub const LABEL_FONT_SIZE: f32 = 8.0;

/// Highlight/visibility policy. A single highlight and "show all" are
/// mutually exclusive in effect: searching or clicking clears show-all, and
/// turning show-all on clears the highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionState {
    /// Result of a search.
    pub highlighted: Option<usize>,
    /// Result of a direct click.
    pub selected: Option<usize>,
    pub show_all_plots: bool,
}

impl SelectionState {
    /// Search hit: highlight one plot and show only it.
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.show_all_plots = false;
    }

    /// Click hit: select and highlight the plot, show only it.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.highlighted = Some(index);
        self.show_all_plots = false;
    }

    /// Click miss: silently clear, not an error.
    pub fn clear(&mut self) {
        self.highlighted = None;
        self.selected = None;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all_plots = !self.show_all_plots;
        if self.show_all_plots {
            self.highlighted = None;
        }
    }
}

/// One marker ready to paint, in final screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerDraw {
    pub plot_index: usize,
    pub x: f64,
    pub y: f64,
    pub color: [u8; 3],
    pub label: String,
    pub highlighted: bool,
}

/// True when a screen position lies within the surface bounds expanded by
/// [`CULL_MARGIN`].
pub fn is_visible(x: f64, y: f64, surface_w: f64, surface_h: f64) -> bool {
    x >= -CULL_MARGIN && x <= surface_w + CULL_MARGIN && y >= -CULL_MARGIN && y <= surface_h + CULL_MARGIN
}

/// Build the draw list for one frame.
///
/// Working set: all plots when `show_all_plots`, else the single highlighted
/// plot if present, else nothing (an empty plan is valid and common). Does
/// not mutate plot data; identical inputs yield an identical plan.
pub fn plan_markers(
    plots: &[Plot],
    transform: &ComposedTransform,
    selection: &SelectionState,
    surface_w: f64,
    surface_h: f64,
) -> Vec<MarkerDraw> {
    let candidates: Vec<usize> = if selection.show_all_plots {
        (0..plots.len()).collect()
    } else if let Some(i) = selection.highlighted.filter(|&i| i < plots.len()) {
        vec![i]
    } else {
        Vec::new()
    };

    let mut plan = Vec::with_capacity(candidates.len().min(4096));
    for i in candidates {
        let plot = &plots[i];
        let (x, y) = transform.to_screen(plot.x, plot.y);
        if !is_visible(x, y, surface_w, surface_h) {
            continue;
        }
        plan.push(MarkerDraw {
            plot_index: i,
            x,
            y,
            color: parse_hex_color(&plot.color),
            label: plot.number.clone(),
            highlighted: selection.highlighted == Some(i),
        });
    }
    plan
}
