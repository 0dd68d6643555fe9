use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use tracing::warn;

use plotmap_core::io::{load_map_data, save_map_data};
use plotmap_core::store::PlotStore;

use crate::convert::to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Pause between progressive batches so the UI thread gets a frame's worth
/// of breathing room between appends.
const BATCH_YIELD: Duration = Duration::from_millis(16);

pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("plotmap-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadMapData { path } => {
                handle_load_map_data(&path, &tx, &ctx);
            }
            WorkerCommand::LoadImage { path } => {
                handle_load_image(&path, &tx, &ctx);
            }
            WorkerCommand::ExportPlots { path, data } => match save_map_data(&path, &data) {
                Ok(()) => send(&tx, &ctx, WorkerResult::ExportComplete { path }),
                Err(e) => send(
                    &tx,
                    &ctx,
                    WorkerResult::Error {
                        message: format!("Export failed: {e}"),
                    },
                ),
            },
        }
    }
}

fn handle_load_map_data(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let data = match load_map_data(path) {
        Ok(data) => data,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "plot data load failed");
            send(
                tx,
                ctx,
                WorkerResult::LoadFailed {
                    message: format!("Failed to load {}: {e}", path.display()),
                },
            );
            return;
        }
    };

    let total = data.plots.len();
    send(
        tx,
        ctx,
        WorkerResult::MapInfo {
            metadata: data.map.clone(),
            total_plots: total,
        },
    );

    // First batch right away for a fast first paint; the rest trickle in with
    // a yield between appends so interaction never stalls on a big file.
    let batches = PlotStore::into_batches(data.plots);
    let last = batches.len().saturating_sub(1);
    for (i, records) in batches.into_iter().enumerate() {
        if i > 0 {
            std::thread::sleep(BATCH_YIELD);
        }
        send(
            tx,
            ctx,
            WorkerResult::PlotBatch {
                records,
                done: i == last,
            },
        );
    }
    if total == 0 {
        send(tx, ctx, WorkerResult::PlotBatch { records: Vec::new(), done: true });
    }
}

fn handle_load_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    send_log(tx, ctx, format!("Decoding {}", path.display()));
    match image::open(path) {
        Ok(decoded) => {
            let natural_size = [decoded.width(), decoded.height()];
            let image = to_color_image(&decoded);
            send(tx, ctx, WorkerResult::ImageLoaded { image, natural_size });
        }
        Err(e) => {
            warn!(error = %e, path = %path.display(), "image decode failed");
            send(
                tx,
                ctx,
                WorkerResult::ImageFailed {
                    message: format!("Failed to load map image: {e}"),
                },
            );
        }
    }
}
