use slidenav_core::consts::{FLAT_EXTENSIONS, GRID_CELL_PRESETS, SLIDE_EXTENSIONS};

use crate::app::GridViewerApp;

pub fn show(ctx: &egui::Context, app: &mut GridViewerApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui.button("Open...").clicked() {
                open_file(ctx, app);
            }

            ui.separator();

            if ui.checkbox(&mut app.grid.visible, "Grid").changed() {
                app.needs_refresh = true;
            }
            egui::ComboBox::from_id_salt("cell_size")
                .selected_text(format!("{} px", app.grid.cell_size))
                .show_ui(ui, |ui| {
                    for preset in GRID_CELL_PRESETS {
                        if ui
                            .selectable_value(&mut app.grid.cell_size, preset, format!("{preset} px"))
                            .clicked()
                        {
                            app.needs_refresh = true;
                        }
                    }
                });

            ui.separator();

            let dims = app.dimensions();
            if ui.button("\u{2212}").clicked() {
                if let Some(dims) = dims {
                    app.viewport.zoom_out(dims);
                    app.needs_refresh = true;
                }
            }
            let mut zoom_label = format!("{}%", app.viewport.zoom_percent());
            if let Some(level) = app.current_level() {
                zoom_label.push_str(&format!(" (L{level})"));
            }
            ui.label(zoom_label);
            if ui.button("+").clicked() {
                if let Some(dims) = dims {
                    app.viewport.zoom_in(dims);
                    app.needs_refresh = true;
                }
            }
            if ui.button("Reset").clicked() {
                if let Some(dims) = dims {
                    app.viewport.reset(dims);
                    app.needs_refresh = true;
                }
            }

            ui.separator();

            if let Some((col, row)) = app.current_sector() {
                ui.label(format!("Sector: (Col {col}, Row {row})"));
            }
        });
        ui.add_space(2.0);
    });
}

fn open_file(ctx: &egui::Context, app: &mut GridViewerApp) {
    let extensions: Vec<&str> = SLIDE_EXTENSIONS
        .iter()
        .chain(FLAT_EXTENSIONS.iter())
        .copied()
        .collect();
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", &extensions)
        .add_filter("All files", &["*"])
        .pick_file()
    {
        app.load_image(ctx, path);
    }
}
