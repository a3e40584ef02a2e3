//! Image source adapter: a uniform region-read interface over pyramidal
//! whole-slide files and flat raster images.
//!
//! Callers interact only with [`ImageSource`]; which backend serves a
//! request is an implementation detail of the adapter.

pub mod flat;
pub mod pyramid;

pub use flat::FlatImage;
pub use pyramid::PyramidSlide;

use std::path::Path;

use image::{imageops, RgbaImage};
use tracing::{debug, info};

use crate::consts::SLIDE_EXTENSIONS;
use crate::error::Result;
use crate::level;

/// A single pyramid level.
///
/// Level 0 is full resolution (downsample 1.0); downsample factors are
/// strictly increasing with the level index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelInfo {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    /// Ratio of full-resolution pixel size to this level's pixel size.
    pub downsample: f64,
}

/// Uniform interface over the two image backends.
pub enum ImageSource {
    Pyramid(PyramidSlide),
    Flat(FlatImage),
}

impl ImageSource {
    /// Open an image file, trying the pyramidal decoder first for
    /// recognised whole-slide extensions.
    ///
    /// A pyramidal-open failure falls back silently to the flat decoder;
    /// only a failure of both paths is surfaced.
    pub fn open(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if SLIDE_EXTENSIONS.contains(&ext.as_str()) {
            match PyramidSlide::open(path) {
                Ok(slide) => {
                    info!(
                        "opened {} as pyramidal TIFF ({} levels)",
                        path.display(),
                        slide.levels().len()
                    );
                    return Ok(Self::Pyramid(slide));
                }
                Err(err) => {
                    debug!(
                        "pyramidal open of {} failed ({err}), trying flat decoder",
                        path.display()
                    );
                }
            }
        }

        let image = FlatImage::open(path)?;
        info!(
            "opened {} as flat image ({}x{})",
            path.display(),
            image.dimensions().0,
            image.dimensions().1
        );
        Ok(Self::Flat(image))
    }

    /// Full-resolution dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Pyramid(slide) => slide.dimensions(),
            Self::Flat(image) => image.dimensions(),
        }
    }

    /// Resolution levels, ordered by strictly increasing downsample.
    /// Flat images expose a single implicit level with downsample 1.0.
    pub fn levels(&self) -> &[LevelInfo] {
        match self {
            Self::Pyramid(slide) => slide.levels(),
            Self::Flat(image) => image.levels(),
        }
    }

    pub fn level_count(&self) -> usize {
        self.levels().len()
    }

    pub fn is_pyramid(&self) -> bool {
        matches!(self, Self::Pyramid(_))
    }

    /// Level rendered for a given zoom factor.
    pub fn best_level(&self, zoom: f64) -> usize {
        level::best_level(self.levels(), zoom)
    }

    /// Read the region at `(x, y)` (full-resolution coordinates) of size
    /// `width` x `height`, rescaled to `round(width*zoom)` x
    /// `round(height*zoom)` with a smoothing filter.
    pub fn read_region(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        zoom: f64,
    ) -> Result<RgbaImage> {
        match self {
            Self::Pyramid(slide) => slide.read_region(x, y, width, height, zoom),
            Self::Flat(image) => image.read_region(x, y, width, height, zoom),
        }
    }

    /// Whole-image thumbnail with the longest side bounded by `max_dim`.
    pub fn thumbnail(&mut self, max_dim: u32) -> Result<RgbaImage> {
        match self {
            Self::Pyramid(slide) => slide.thumbnail(max_dim),
            Self::Flat(image) => Ok(image.thumbnail(max_dim)),
        }
    }

    /// Objective magnification from the file metadata, when present.
    pub fn magnification(&self) -> Option<&str> {
        match self {
            Self::Pyramid(slide) => slide.magnification(),
            Self::Flat(_) => None,
        }
    }

    pub fn megapixels(&self) -> f64 {
        let (w, h) = self.dimensions();
        w as f64 * h as f64 / 1e6
    }

    /// Short backend description for status text.
    pub fn kind_label(&self) -> String {
        match self {
            Self::Pyramid(slide) => {
                format!("pyramidal TIFF, {} levels", slide.levels().len())
            }
            Self::Flat(_) => "flat image".to_string(),
        }
    }
}

/// Downscale so the longest side is at most `max_dim`, preserving aspect.
/// Images already within the bound are returned unscaled.
pub(crate) fn resize_to_bound(image: &RgbaImage, max_dim: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let longest = w.max(h);
    if longest <= max_dim {
        return image.clone();
    }
    let scale = max_dim as f64 / longest as f64;
    let tw = ((w as f64 * scale).round() as u32).max(1);
    let th = ((h as f64 * scale).round() as u32).max(1);
    imageops::resize(image, tw, th, imageops::FilterType::Lanczos3)
}
