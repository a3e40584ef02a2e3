use crate::app::GridViewerApp;

pub fn show(ctx: &egui::Context, app: &mut GridViewerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(dims) = app.dimensions() {
                ui.label(format!("{}x{}", dims.0, dims.1));
                ui.separator();
            }
            ui.label(format!("Zoom: {}%", app.viewport.zoom_percent()));
            if let Some(level) = app.current_level() {
                ui.separator();
                ui.label(format!("Level: {level}"));
            }
        });

        ui.add_space(2.0);
    });
}
