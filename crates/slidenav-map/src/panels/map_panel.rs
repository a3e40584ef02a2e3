use slidenav_core::tracking::buckets;

use crate::app::MapViewerApp;

pub fn show(ctx: &egui::Context, app: &mut MapViewerApp) {
    egui::SidePanel::right("map_panel")
        .default_width(310.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Navigation Map");
            show_map(ui, app);
            ui.separator();
            show_legend(ui, app);
            ui.separator();
            show_image_info(ui, app);
        });
}

fn show_map(ui: &mut egui::Ui, app: &mut MapViewerApp) {
    let Some(texture) = app.map_texture.clone() else {
        ui.label("No image loaded");
        return;
    };

    let size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter().image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    // Current view, drawn live so it follows every pan.
    if let (Some(navmap), Some(dims)) = (&app.navmap, app.dimensions()) {
        let r = navmap.viewport_rect(&app.viewport, dims);
        let vp_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(r.x, r.y),
            egui::vec2(r.w, r.h),
        );
        ui.painter().rect_stroke(
            vp_rect,
            0.0,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
            egui::epaint::StrokeKind::Outside,
        );
    }

    let clicked_at = response
        .clicked()
        .then(|| response.interact_pointer_pos())
        .flatten();
    if let Some(pos) = clicked_at {
        let local = pos - rect.min;
        let target = app
            .navmap
            .as_ref()
            .map(|navmap| navmap.click_to_image(local.x, local.y));
        if let (Some((x, y)), Some(dims)) = (target, app.dimensions()) {
            app.viewport.center_on(x, y, dims);
            app.needs_refresh = true;
        }
    }
}

fn show_legend(ui: &mut egui::Ui, app: &MapViewerApp) {
    ui.heading("Tracking");
    for (index, bucket) in buckets().iter().enumerate() {
        ui.horizontal(|ui| {
            let (swatch, _) =
                ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
            ui.painter().rect_filled(
                swatch,
                2.0,
                egui::Color32::from_rgb(bucket.color[0], bucket.color[1], bucket.color[2]),
            );
            let count = app
                .tracking
                .as_ref()
                .map(|t| t.visited_count(index))
                .unwrap_or(0);
            ui.label(format!("{}% zoom: {count} cells", bucket.percent));
        });
    }
}

fn show_image_info(ui: &mut egui::Ui, app: &MapViewerApp) {
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
}
