use crate::app::GridViewerApp;

pub fn show(ctx: &egui::Context, app: &mut GridViewerApp) {
    egui::SidePanel::left("sidebar")
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Sector Navigator");

            ui.horizontal(|ui| {
                ui.label("Column:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.sector_col_input).desired_width(60.0),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Row:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.sector_row_input).desired_width(60.0),
                );
            });
            if ui.button("Go to Sector").clicked() {
                app.go_to_selected_sector();
            }

            ui.separator();
            show_image_info(ui, app);
        });
}

fn show_image_info(ui: &mut egui::Ui, app: &GridViewerApp) {
    ui.heading("Image");
    let Some(source) = &app.source else {
        ui.label("No image loaded");
        return;
    };

    let dims = source.dimensions();
    ui.label(format!("Dimensions: {} x {}", dims.0, dims.1));
    ui.label(format!("Size: {:.1} MP", source.megapixels()));
    ui.label(format!("Format: {}", source.kind_label()));
    if let Some(mag) = source.magnification() {
        ui.label(format!("Magnification: {mag}x"));
    }

    ui.add_space(4.0);
    let cols = app.grid.cols(dims);
    let rows = app.grid.rows(dims);
    ui.label(format!("Grid: {cols} x {rows} sectors"));
    ui.label(format!("Total sectors: {}", cols * rows));
    ui.label(format!("Cell size: {} px", app.grid.cell_size));
}
