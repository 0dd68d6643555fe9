use crate::app::PlotMapApp;

pub fn show(ctx: &egui::Context, app: &mut PlotMapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar while plot batches stream in
        if app.ui_state.loading_plots {
            let fraction = match app.ui_state.expected_plots {
                Some(total) if total > 0 => app.store.len() as f32 / total as f32,
                _ => 0.0, // indeterminate
            };
            let detail = match app.ui_state.expected_plots {
                Some(total) => format!("Loading plots ({}/{total})", app.store.len()),
                None => "Loading plots...".to_string(),
            };
            ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref meta) = app.ui_state.map_metadata {
                ui.label(format!("{}x{}", meta.width, meta.height));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.view.viewport.scale * 100.0));
            ui.separator();
            ui.label(format!("Plots: {}", app.store.len()));
        });

        ui.add_space(2.0);
    });
}
