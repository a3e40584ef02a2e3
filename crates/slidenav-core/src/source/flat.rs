use std::path::Path;

use image::{imageops, ImageReader, RgbaImage};

use crate::error::Result;
use crate::source::{resize_to_bound, LevelInfo};

/// Single-resolution raster backend.
///
/// The decoded image is held in memory; region reads are crops of that
/// buffer rescaled by the zoom factor.
pub struct FlatImage {
    image: RgbaImage,
    level: [LevelInfo; 1],
}

impl FlatImage {
    pub fn open(path: &Path) -> Result<Self> {
        // Decode by content, not extension: slide files that fail the
        // pyramidal path can carry any raster payload.
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            image,
            level: [LevelInfo {
                index: 0,
                width,
                height,
                downsample: 1.0,
            }],
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.level[0].width, self.level[0].height)
    }

    /// The single implicit level.
    pub fn levels(&self) -> &[LevelInfo] {
        &self.level
    }

    /// Crop `(x, y)..(min(x+width, imgW), min(y+height, imgH))` and
    /// rescale by `zoom` with a smoothing filter.
    pub fn read_region(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        zoom: f64,
    ) -> Result<RgbaImage> {
        let (img_w, img_h) = self.dimensions();
        let x = x.min(img_w.saturating_sub(1));
        let y = y.min(img_h.saturating_sub(1));
        let crop_w = (x + width).min(img_w) - x;
        let crop_h = (y + height).min(img_h) - y;
        let crop_w = crop_w.max(1);
        let crop_h = crop_h.max(1);

        let region = imageops::crop_imm(&self.image, x, y, crop_w, crop_h).to_image();
        let target_w = ((crop_w as f64 * zoom).round() as u32).max(1);
        let target_h = ((crop_h as f64 * zoom).round() as u32).max(1);
        Ok(imageops::resize(
            &region,
            target_w,
            target_h,
            imageops::FilterType::Lanczos3,
        ))
    }

    pub fn thumbnail(&self, max_dim: u32) -> RgbaImage {
        resize_to_bound(&self.image, max_dim)
    }
}
