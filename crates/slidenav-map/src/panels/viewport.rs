use crate::app::MapViewerApp;

pub fn show(ctx: &egui::Context, app: &mut MapViewerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);
        sync_canvas_size(app, rect);

        let Some(texture) = app.texture.clone() else {
            show_placeholder(ui);
            return;
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        handle_pan(app, &response);
        handle_zoom(ui, &response, app);

        let tex_size = egui::vec2(texture.size()[0] as f32, texture.size()[1] as f32);
        let img_rect = egui::Rect::from_min_size(rect.min, tex_size);
        ui.painter().image(
            texture.id(),
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Keep the viewport's canvas size in step with the panel, so region
/// reads match what is on screen.
fn sync_canvas_size(app: &mut MapViewerApp, rect: egui::Rect) {
    let Some(dims) = app.dimensions() else {
        return;
    };
    let (w, h) = (rect.width() as f64, rect.height() as f64);
    if (w - app.viewport.canvas_w).abs() > 0.5 || (h - app.viewport.canvas_h).abs() > 0.5 {
        app.viewport.set_canvas_size(w, h, dims);
        app.needs_refresh = true;
    }
}

fn handle_pan(app: &mut MapViewerApp, response: &egui::Response) {
    if !response.dragged_by(egui::PointerButton::Primary) {
        return;
    }
    let delta = response.drag_delta();
    if delta == egui::Vec2::ZERO {
        return;
    }
    if let Some(dims) = app.dimensions() {
        // Dragging the content right moves the view left.
        app.viewport.pan(-delta.x as f64, -delta.y as f64, dims);
        app.needs_refresh = true;
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut MapViewerApp) {
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 || !response.hovered() {
        return;
    }
    let Some(dims) = app.dimensions() else {
        return;
    };
    if scroll > 0.0 {
        app.viewport.zoom_in(dims);
    } else {
        app.viewport.zoom_out(dims);
    }
    app.needs_refresh = true;
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
