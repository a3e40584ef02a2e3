//! Region compositing: produce the display bitmap for the current
//! viewport and the grid overlay geometry drawn over it.
//!
//! The overlay is pure geometry plus label strings; the applications
//! paint it with their toolkit's painter, so this module stays free of
//! GUI types.

use image::RgbaImage;

use crate::consts::{LINE_LABEL_MARGIN, SECTOR_LABEL_MIN_ZOOM};
use crate::error::Result;
use crate::grid::GridConfig;
use crate::source::ImageSource;
use crate::viewport::ViewportState;

/// Render the visible region at the viewport's zoom. The viewport is
/// re-clamped first, so the read rectangle is always inside the image.
pub fn render_region(source: &mut ImageSource, viewport: &mut ViewportState) -> Result<RgbaImage> {
    let dims = source.dimensions();
    viewport.clamp(dims);
    let (x, y, w, h) = viewport.read_rect(dims);
    source.read_region(x, y, w, h, viewport.zoom)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One grid line in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    /// x for vertical lines, y for horizontal ones, in display pixels.
    pub position: f32,
    /// Column or row boundary index the line marks.
    pub index: u32,
    /// Lines close to the display origin keep their label hidden so the
    /// two axes' labels cannot collide.
    pub label_visible: bool,
}

/// Sector plaque placed at a cell center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorLabel {
    pub x: f32,
    pub y: f32,
    pub col: u32,
    pub row: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridOverlay {
    pub lines: Vec<GridLine>,
    pub sectors: Vec<SectorLabel>,
}

/// Compute the grid overlay for the current view.
///
/// `display_w`/`display_h` is the size of the rendered region bitmap,
/// which may be smaller than the canvas when the whole image fits.
pub fn grid_overlay(
    viewport: &ViewportState,
    grid: &GridConfig,
    dims: (u32, u32),
    display_w: f32,
    display_h: f32,
) -> GridOverlay {
    let mut overlay = GridOverlay::default();
    if !grid.visible {
        return overlay;
    }

    let cell = grid.cell_size as f64;
    let zoom = viewport.zoom;

    // Vertical lines at image x = k*cell, screen x = (k*cell - offset)*zoom.
    let mut k = (viewport.offset_x / cell).floor() as u32;
    loop {
        let screen_x = (k as f64 * cell - viewport.offset_x) * zoom;
        if screen_x > display_w as f64 {
            break;
        }
        if screen_x >= 0.0 {
            overlay.lines.push(GridLine {
                orientation: Orientation::Vertical,
                position: screen_x as f32,
                index: k,
                label_visible: screen_x >= LINE_LABEL_MARGIN,
            });
        }
        k += 1;
    }

    let mut k = (viewport.offset_y / cell).floor() as u32;
    loop {
        let screen_y = (k as f64 * cell - viewport.offset_y) * zoom;
        if screen_y > display_h as f64 {
            break;
        }
        if screen_y >= 0.0 {
            overlay.lines.push(GridLine {
                orientation: Orientation::Horizontal,
                position: screen_y as f32,
                index: k,
                label_visible: screen_y >= LINE_LABEL_MARGIN,
            });
        }
        k += 1;
    }

    if zoom >= SECTOR_LABEL_MIN_ZOOM {
        let cols = grid.cols(dims);
        let rows = grid.rows(dims);
        let (view_w, view_h) = viewport.view_size(dims);
        let first_col = (viewport.offset_x / cell).floor() as u32;
        let last_col = (((viewport.offset_x + view_w) / cell).floor() as u32).min(cols.saturating_sub(1));
        let first_row = (viewport.offset_y / cell).floor() as u32;
        let last_row = (((viewport.offset_y + view_h) / cell).floor() as u32).min(rows.saturating_sub(1));

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let (cx, cy) = grid.sector_center(col, row);
                let screen_x = (cx - viewport.offset_x) * zoom;
                let screen_y = (cy - viewport.offset_y) * zoom;
                let inside = screen_x >= 0.0
                    && screen_x <= display_w as f64
                    && screen_y >= 0.0
                    && screen_y <= display_h as f64;
                if inside {
                    overlay.sectors.push(SectorLabel {
                        x: screen_x as f32,
                        y: screen_y as f32,
                        col,
                        row,
                    });
                }
            }
        }
    }

    overlay
}
