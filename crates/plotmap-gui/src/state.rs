use std::path::PathBuf;

use plotmap_core::plot::MapMetadata;
use plotmap_core::viewport::ViewportState;

/// Base map texture and the viewport transform applied to it.
pub struct MapView {
    pub texture: Option<egui::TextureHandle>,
    /// Natural pixel size of the source raster (before any display
    /// downscaling) — ground truth for coordinate interpretation.
    pub natural_size: Option<[u32; 2]>,
    pub viewport: ViewportState,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            texture: None,
            natural_size: None,
            viewport: ViewportState::default(),
        }
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UiState {
    pub data_path: PathBuf,
    pub image_path: PathBuf,
    pub map_metadata: Option<MapMetadata>,

    pub search_query: String,
    /// User-visible search-miss notice; cleared on the next successful search.
    pub search_notice: Option<String>,

    /// Data batches still streaming in.
    pub loading_plots: bool,
    pub expected_plots: Option<usize>,

    /// Base image failed to decode; holds the message for the retry screen.
    pub image_error: Option<String>,

    /// Edit buffer for relabeling the selected plot (view-local only).
    pub edit_number: String,

    pub log_messages: Vec<String>,
}

impl UiState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
