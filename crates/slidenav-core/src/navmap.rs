//! Navigation thumbnail map: a bounded whole-image thumbnail plus the
//! scale factors that map between thumbnail and full-resolution space.

use image::RgbaImage;

use crate::consts::{THUMBNAIL_MAX_DIM, TRACKING_CELL_SIZE};
use crate::error::Result;
use crate::source::ImageSource;
use crate::tracking::TrackingState;
use crate::viewport::ViewportState;

/// Axis-aligned rectangle in thumbnail pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

pub struct NavMap {
    thumbnail: RgbaImage,
    scale_x: f64,
    scale_y: f64,
}

impl NavMap {
    /// Build the map from the source's whole-image thumbnail (longest
    /// side bounded by the thumbnail limit).
    pub fn build(source: &mut ImageSource) -> Result<Self> {
        let (image_w, image_h) = source.dimensions();
        let thumbnail = source.thumbnail(THUMBNAIL_MAX_DIM)?;
        let (thumb_w, thumb_h) = thumbnail.dimensions();
        Ok(Self {
            thumbnail,
            scale_x: thumb_w as f64 / image_w as f64,
            scale_y: thumb_h as f64 / image_h as f64,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.thumbnail.dimensions()
    }

    pub fn thumbnail(&self) -> &RgbaImage {
        &self.thumbnail
    }

    /// Thumbnail copy with every visited tracking cell tinted in its
    /// bucket color. Buckets blend in declaration order, so later buckets
    /// come out on top where cells overlap.
    pub fn composited(&self, tracking: &TrackingState) -> RgbaImage {
        let mut out = self.thumbnail.clone();
        let (thumb_w, thumb_h) = out.dimensions();
        let cell = TRACKING_CELL_SIZE as f64;

        for (_, col, row, color) in tracking.visited_cells() {
            let x0 = ((col as f64 * cell * self.scale_x).round() as u32).min(thumb_w);
            let y0 = ((row as f64 * cell * self.scale_y).round() as u32).min(thumb_h);
            let x1 = (((col + 1) as f64 * cell * self.scale_x).round() as u32).min(thumb_w);
            let y1 = (((row + 1) as f64 * cell * self.scale_y).round() as u32).min(thumb_h);
            for y in y0..y1.max(y0 + 1).min(thumb_h) {
                for x in x0..x1.max(x0 + 1).min(thumb_w) {
                    blend_pixel(&mut out, x, y, color);
                }
            }
        }
        out
    }

    /// Current clamped view in thumbnail space.
    pub fn viewport_rect(&self, viewport: &ViewportState, dims: (u32, u32)) -> MapRect {
        let (view_w, view_h) = viewport.view_size(dims);
        MapRect {
            x: (viewport.offset_x * self.scale_x) as f32,
            y: (viewport.offset_y * self.scale_y) as f32,
            w: (view_w * self.scale_x) as f32,
            h: (view_h * self.scale_y) as f32,
        }
    }

    /// Map a thumbnail click back to full-resolution coordinates.
    pub fn click_to_image(&self, map_x: f32, map_y: f32) -> (f64, f64) {
        (map_x as f64 / self.scale_x, map_y as f64 / self.scale_y)
    }
}

/// Source-over blend of a semi-transparent RGBA color onto one pixel.
fn blend_pixel(image: &mut RgbaImage, x: u32, y: u32, color: [u8; 4]) {
    let px = image.get_pixel_mut(x, y);
    let alpha = color[3] as f64 / 255.0;
    for channel in 0..3 {
        let src = color[channel] as f64;
        let dst = px.0[channel] as f64;
        px.0[channel] = (src * alpha + dst * (1.0 - alpha)).round() as u8;
    }
}
