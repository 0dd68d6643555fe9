use std::path::PathBuf;

use plotmap_core::plot::{MapData, MapMetadata, PlotRecord};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch and parse the plot data file, then stream it in batches.
    LoadMapData { path: PathBuf },

    /// Decode the base map image into a displayable texture.
    LoadImage { path: PathBuf },

    /// Write a point-in-time snapshot of the plot list back to JSON.
    ExportPlots { path: PathBuf, data: MapData },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Data file parsed; batches follow.
    MapInfo {
        metadata: MapMetadata,
        total_plots: usize,
    },

    /// One progressive batch of plots. The first batch arrives before the
    /// ready signal so initial paint is fast; `done` marks the last one.
    PlotBatch {
        records: Vec<PlotRecord>,
        done: bool,
    },

    /// Base image decoded. `natural_size` is the pre-downscale pixel size
    /// and is the ground truth for coordinate interpretation.
    ImageLoaded {
        image: egui::ColorImage,
        natural_size: [u32; 2],
    },

    /// Base image failed to decode; viewer shows a retry affordance.
    ImageFailed { message: String },

    /// Data fetch/parse failed; store stays empty, UI stays usable.
    LoadFailed { message: String },

    ExportComplete { path: PathBuf },

    Error { message: String },

    Log { message: String },
}
