use slidenav_core::consts::{FLAT_EXTENSIONS, SLIDE_EXTENSIONS};
use slidenav_core::tracking::buckets;

use crate::app::MapViewerApp;

pub fn show(ctx: &egui::Context, app: &mut MapViewerApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if ui.button("Open...").clicked() {
                open_file(ctx, app);
            }

            ui.separator();

            let dims = app.dimensions();
            // Quick-zoom presets, tinted with their tracking colors.
            for bucket in buckets() {
                let color =
                    egui::Color32::from_rgb(bucket.color[0], bucket.color[1], bucket.color[2]);
                let label = egui::RichText::new(format!("{}%", bucket.percent)).color(color);
                if ui.button(label).clicked() {
                    if let Some(dims) = dims {
                        app.viewport.set_zoom_percent(bucket.percent, dims);
                        app.needs_refresh = true;
                    }
                }
            }

            ui.separator();

            if ui.button("\u{2212}").clicked() {
                if let Some(dims) = dims {
                    app.viewport.zoom_out(dims);
                    app.needs_refresh = true;
                }
            }
            ui.label(format!("{}%", app.viewport.zoom_percent()));
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

            if ui.button("Clear Tracking").clicked() {
                app.clear_tracking(ctx);
            }
        });
        ui.add_space(2.0);
    });
}

fn open_file(ctx: &egui::Context, app: &mut MapViewerApp) {
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
