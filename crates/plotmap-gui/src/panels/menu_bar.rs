use crate::app::PlotMapApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut PlotMapApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Plot Data...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_plot_data(app);
                }

                if ui.button("Open Map Image...").clicked() {
                    ui.close();
                    open_map_image(app);
                }

                ui.separator();

                let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E);
                if ui.add(egui::Button::new("Export Plots...").shortcut_text(ctx.format_shortcut(&export_shortcut))).clicked() {
                    ui.close();
                    export_plots(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.view.viewport.reset();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_plot_data(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E))) {
            export_plots(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_plot_data(app: &mut PlotMapApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadMapData { path });
        }
    });
}

fn open_map_image(app: &mut PlotMapApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["jpg", "jpeg", "png", "webp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
        }
    });
}

/// Snapshot the current plot list at click time; the dialog and write happen
/// off the UI thread.
fn export_plots(app: &mut PlotMapApp) {
    let data = app.export_snapshot();
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("plots-corrected.json")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::ExportPlots { path, data });
        }
    });
}
