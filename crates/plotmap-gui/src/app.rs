use std::path::PathBuf;
use std::sync::mpsc;

use plotmap_core::plot::{MapData, MapMetadata};
use plotmap_core::render::SelectionState;
use plotmap_core::store::PlotStore;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{MapView, UiState};
use crate::worker;

pub struct PlotMapApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub store: PlotStore,
    pub selection: SelectionState,
    pub view: MapView,
    pub ui_state: UiState,
    pub show_about: bool,
}

impl PlotMapApp {
    pub fn new(ctx: &egui::Context, data_path: PathBuf, image_path: PathBuf) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let ui_state = UiState {
            data_path,
            image_path,
            ..Default::default()
        };

        Self {
            cmd_tx,
            result_rx,
            store: PlotStore::new(),
            selection: SelectionState::default(),
            view: MapView::default(),
            ui_state,
            show_about: false,
        }
    }

    /// Issue the startup commands. Called once by the composition root.
    pub fn request_initial_load(&mut self) {
        self.ui_state.loading_plots = true;
        self.send_command(WorkerCommand::LoadMapData {
            path: self.ui_state.data_path.clone(),
        });
        self.send_command(WorkerCommand::LoadImage {
            path: self.ui_state.image_path.clone(),
        });
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::MapInfo { metadata, total_plots } => {
                    // A fresh load replaces the previous plot set wholesale.
                    self.store.clear();
                    self.selection = SelectionState::default();
                    self.ui_state.loading_plots = true;
                    self.ui_state.add_log(format!(
                        "Plot data: {} ({}x{}, {total_plots} plots)",
                        metadata.source, metadata.width, metadata.height
                    ));
                    self.ui_state.map_metadata = Some(metadata);
                    self.ui_state.expected_plots = Some(total_plots);
                }
                WorkerResult::PlotBatch { records, done } => {
                    self.store.extend(&records);
                    if done {
                        self.ui_state.loading_plots = false;
                        self.ui_state.add_log(format!("{} plots loaded", self.store.len()));
                    }
                }
                WorkerResult::ImageLoaded { image, natural_size } => {
                    let texture = ctx.load_texture("base-map", image, egui::TextureOptions::LINEAR);
                    self.view.texture = Some(texture);
                    self.view.natural_size = Some(natural_size);
                    self.view.viewport.reset();
                    self.ui_state.image_error = None;
                    self.ui_state.add_log(format!(
                        "Map image {}x{}",
                        natural_size[0], natural_size[1]
                    ));
                }
                WorkerResult::ImageFailed { message } => {
                    self.ui_state.image_error = Some(message);
                }
                WorkerResult::LoadFailed { message } => {
                    self.store.clear();
                    self.selection = SelectionState::default();
                    self.ui_state.loading_plots = false;
                    self.ui_state.expected_plots = None;
                    self.ui_state.add_log(message);
                }
                WorkerResult::ExportComplete { path } => {
                    self.ui_state.add_log(format!("Exported: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Exact match first, substring fallback; a miss surfaces a notice and
    /// leaves the existing highlight alone.
    pub fn run_search(&mut self) {
        let query = self.ui_state.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        match self.store.search(&query) {
            Some(index) => {
                self.selection.highlight(index);
                self.ui_state.search_notice = None;
            }
            None => {
                self.ui_state.search_notice = Some("No plot found with that number.".to_string());
            }
        }
    }

    /// Click hit: select the plot and seed the relabel buffer.
    pub fn select_plot(&mut self, index: usize) {
        self.selection.select(index);
        if let Some(plot) = self.store.get(index) {
            self.ui_state.edit_number = plot.number.clone();
        }
    }

    pub fn retry_image(&mut self) {
        self.ui_state.image_error = None;
        self.send_command(WorkerCommand::LoadImage {
            path: self.ui_state.image_path.clone(),
        });
    }

    /// Point-in-time snapshot of the current plot list in on-disk shape.
    /// Metadata falls back to the source map's known dimensions if the data
    /// file never loaded.
    pub fn export_snapshot(&self) -> MapData {
        let map = self.ui_state.map_metadata.clone().unwrap_or(MapMetadata {
            width: 9283,
            height: 14028,
            source: "map.jpg".to_string(),
        });
        MapData {
            map,
            plots: self.store.to_records(),
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for PlotMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::control_panel::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Plot Map")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Plot Map");
                        ui.label("Interactive subdivision map viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
