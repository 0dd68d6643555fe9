use crate::app::PlotMapApp;
use crate::panels::section_header;

pub fn show(ctx: &egui::Context, app: &mut PlotMapApp) {
    egui::SidePanel::left("controls")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Interactive Plot Map");
            ui.separator();

            search_section(ui, app);
            ui.separator();
            zoom_section(ui, app);
            ui.separator();
            plots_section(ui, app);
        });
}

fn search_section(ui: &mut egui::Ui, app: &mut PlotMapApp) {
    section_header(ui, "Search", None);

    let edit = ui.add(
        egui::TextEdit::singleline(&mut app.ui_state.search_query)
            .hint_text("Plot number (e.g. 1, 2, 3...)"),
    );
    if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        app.run_search();
    }

    ui.horizontal(|ui| {
        if ui.button("Search").clicked() {
            app.run_search();
        }
        if ui.button("Clear").clicked() {
            app.selection.highlighted = None;
            app.selection.show_all_plots = false;
            app.ui_state.search_notice = None;
        }
    });

    if let Some(ref notice) = app.ui_state.search_notice {
        ui.colored_label(egui::Color32::YELLOW, notice);
    }
}

fn zoom_section(ui: &mut egui::Ui, app: &mut PlotMapApp) {
    section_header(
        ui,
        "Zoom & Pan",
        Some(&format!("{:.0}%", app.view.viewport.scale * 100.0)),
    );

    ui.horizontal(|ui| {
        if ui.button("Zoom In").clicked() {
            app.view.viewport.zoom_in();
        }
        if ui.button("Zoom Out").clicked() {
            app.view.viewport.zoom_out();
        }
    });
    if ui.button("Reset View").clicked() {
        app.view.viewport.reset();
    }

    ui.add_space(4.0);
    ui.small("Click and drag to pan, scroll to zoom");
    ui.small("Arrow keys pan, +/- zoom, 0 resets");
}

fn plots_section(ui: &mut egui::Ui, app: &mut PlotMapApp) {
    let count_label = match app.ui_state.expected_plots {
        Some(total) if app.ui_state.loading_plots => {
            format!("{}/{total}", app.store.len())
        }
        _ => format!("{}", app.store.len()),
    };
    section_header(ui, "Plots", Some(&count_label));

    let toggle_label = if app.selection.show_all_plots {
        "Hide All Plots"
    } else {
        "Show All Plots"
    };
    if ui.button(toggle_label).clicked() {
        app.selection.toggle_show_all();
    }

    if let Some(index) = app.selection.selected {
        selected_plot_details(ui, app, index);
    }
}

fn selected_plot_details(ui: &mut egui::Ui, app: &mut PlotMapApp, index: usize) {
    let Some(plot) = app.store.get(index).cloned() else {
        return;
    };

    ui.add_space(6.0);
    ui.group(|ui| {
        ui.strong("Selected Plot");
        ui.label(format!("Number: {}", plot.number));
        let size = if plot.size.is_empty() { "N/A" } else { &plot.size };
        ui.label(format!("Size: {size}"));

        // View-local relabel; nothing is written back to the data file.
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut app.ui_state.edit_number).desired_width(100.0),
            );
            if ui.button("Rename").clicked() {
                let new_number = app.ui_state.edit_number.trim().to_string();
                if !new_number.is_empty() && new_number != plot.number {
                    match app.store.set_number(index, new_number.clone()) {
                        Ok(()) => app
                            .ui_state
                            .add_log(format!("Renamed {} -> {new_number}", plot.number)),
                        Err(e) => app.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
            }
        });
    });
}
