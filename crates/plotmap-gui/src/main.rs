mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/plots-for-editing.json"));
    let image_path = std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/map.jpg"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Plot Map"),
        ..Default::default()
    };

    eframe::run_native(
        "PlotMap",
        options,
        Box::new(move |cc| {
            let mut app = app::PlotMapApp::new(&cc.egui_ctx, data_path, image_path);
            // Kick off data fetch and image decode from the composition root;
            // the window stays interactive while both are pending.
            app.request_initial_load();
            Ok(Box::new(app))
        }),
    )
}
