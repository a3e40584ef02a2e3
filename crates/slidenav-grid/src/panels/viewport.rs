use slidenav_core::compositor::{GridOverlay, Orientation};

use crate::app::GridViewerApp;

pub fn show(ctx: &egui::Context, app: &mut GridViewerApp) {
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

        if app.grid.visible {
            draw_grid_overlay(ui, img_rect, &app.overlay);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Keep the viewport's canvas size in step with the panel, so region
/// reads match what is on screen.
fn sync_canvas_size(app: &mut GridViewerApp, rect: egui::Rect) {
    let Some(dims) = app.dimensions() else {
        return;
    };
    let (w, h) = (rect.width() as f64, rect.height() as f64);
    if (w - app.viewport.canvas_w).abs() > 0.5 || (h - app.viewport.canvas_h).abs() > 0.5 {
        app.viewport.set_canvas_size(w, h, dims);
        app.needs_refresh = true;
    }
}

fn handle_pan(app: &mut GridViewerApp, response: &egui::Response) {
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

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut GridViewerApp) {
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

fn draw_grid_overlay(ui: &egui::Ui, img_rect: egui::Rect, overlay: &GridOverlay) {
    let painter = ui.painter();
    let stroke = egui::Stroke::new(3.0, egui::Color32::YELLOW);

    for line in &overlay.lines {
        let (from, to) = match line.orientation {
            Orientation::Vertical => {
                let x = img_rect.min.x + line.position;
                (
                    egui::pos2(x, img_rect.min.y),
                    egui::pos2(x, img_rect.max.y),
                )
            }
            Orientation::Horizontal => {
                let y = img_rect.min.y + line.position;
                (
                    egui::pos2(img_rect.min.x, y),
                    egui::pos2(img_rect.max.x, y),
                )
            }
        };
        painter.line_segment([from, to], stroke);
    }

    for line in &overlay.lines {
        if !line.label_visible {
            continue;
        }
        let pos = match line.orientation {
            Orientation::Vertical => {
                egui::pos2(img_rect.min.x + line.position + 4.0, img_rect.min.y + 4.0)
            }
            Orientation::Horizontal => {
                egui::pos2(img_rect.min.x + 4.0, img_rect.min.y + line.position + 4.0)
            }
        };
        painter.text(
            pos,
            egui::Align2::LEFT_TOP,
            line.index.to_string(),
            egui::FontId::proportional(12.0),
            egui::Color32::YELLOW,
        );
    }

    for sector in &overlay.sectors {
        let center = img_rect.min + egui::vec2(sector.x, sector.y);
        let text = format!("Sector\n({},{})", sector.col, sector.row);
        let galley = painter.layout(
            text,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
            f32::INFINITY,
        );
        let plaque = egui::Rect::from_center_size(center, galley.size() + egui::vec2(12.0, 8.0));
        painter.rect_filled(plaque, 3.0, egui::Color32::from_black_alpha(160));
        painter.galley(
            plaque.min + egui::vec2(6.0, 4.0),
            galley,
            egui::Color32::WHITE,
        );
    }
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
