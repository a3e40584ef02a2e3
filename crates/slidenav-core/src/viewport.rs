//! Viewport state: zoom factor plus full-resolution offset of the
//! visible region's top-left corner.
//!
//! Every mutation re-clamps, so the visible rectangle never leaves the
//! image: `view = min(canvas/zoom, image)` per axis and the offset stays
//! within `[0, image - view]`.

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    /// Top-left of the visible region, in full-resolution pixels.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Canvas size in display pixels.
    pub canvas_w: f64,
    pub canvas_h: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            canvas_w: 800.0,
            canvas_h: 600.0,
        }
    }
}

impl ViewportState {
    /// Size of the visible region in full-resolution pixels.
    pub fn view_size(&self, dims: (u32, u32)) -> (f64, f64) {
        let view_w = (self.canvas_w / self.zoom).min(dims.0 as f64);
        let view_h = (self.canvas_h / self.zoom).min(dims.1 as f64);
        (view_w, view_h)
    }

    /// Center of the visible region in full-resolution pixels.
    pub fn center(&self, dims: (u32, u32)) -> (f64, f64) {
        let (view_w, view_h) = self.view_size(dims);
        (self.offset_x + view_w / 2.0, self.offset_y + view_h / 2.0)
    }

    pub fn clamp(&mut self, dims: (u32, u32)) {
        let (view_w, view_h) = self.view_size(dims);
        self.offset_x = self.offset_x.clamp(0.0, (dims.0 as f64 - view_w).max(0.0));
        self.offset_y = self.offset_y.clamp(0.0, (dims.1 as f64 - view_h).max(0.0));
    }

    /// Pan by a canvas-pixel delta (positive moves the view right/down).
    pub fn pan(&mut self, dx_canvas: f64, dy_canvas: f64, dims: (u32, u32)) {
        self.offset_x += dx_canvas / self.zoom;
        self.offset_y += dy_canvas / self.zoom;
        self.clamp(dims);
    }

    pub fn zoom_in(&mut self, dims: (u32, u32)) {
        self.set_zoom(self.zoom * ZOOM_STEP, dims);
    }

    pub fn zoom_out(&mut self, dims: (u32, u32)) {
        self.set_zoom(self.zoom / ZOOM_STEP, dims);
    }

    pub fn set_zoom(&mut self, zoom: f64, dims: (u32, u32)) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp(dims);
    }

    pub fn set_zoom_percent(&mut self, percent: u32, dims: (u32, u32)) {
        self.set_zoom(percent as f64 / 100.0, dims);
    }

    /// Displayed zoom percentage.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    /// Center the view on a full-resolution point.
    pub fn center_on(&mut self, x: f64, y: f64, dims: (u32, u32)) {
        let (view_w, view_h) = self.view_size(dims);
        self.offset_x = x - view_w / 2.0;
        self.offset_y = y - view_h / 2.0;
        self.clamp(dims);
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64, dims: (u32, u32)) {
        self.canvas_w = width;
        self.canvas_h = height;
        self.clamp(dims);
    }

    /// Zoom 1.0, origin offset. Applied on every image load.
    pub fn reset(&mut self, dims: (u32, u32)) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.clamp(dims);
    }

    /// Integer read rectangle for the region request, guaranteed inside
    /// the image.
    pub fn read_rect(&self, dims: (u32, u32)) -> (u32, u32, u32, u32) {
        let (view_w, view_h) = self.view_size(dims);
        let x = (self.offset_x.round() as u32).min(dims.0.saturating_sub(1));
        let y = (self.offset_y.round() as u32).min(dims.1.saturating_sub(1));
        let w = (view_w.round() as u32).max(1).min(dims.0 - x);
        let h = (view_h.round() as u32).max(1).min(dims.1 - y);
        (x, y, w, h)
    }
}
