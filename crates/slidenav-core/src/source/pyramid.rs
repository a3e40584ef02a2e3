//! Pyramidal TIFF backend.
//!
//! Walks the file's IFD chain once at open time and keeps the IFDs that
//! form a resolution pyramid: full images whose dimensions shrink by a
//! minimum factor per level. Label, macro and thumbnail IFDs fail that
//! check and are skipped. Downsample factors are derived from the
//! level-0 dimensions, so level 0 is exactly 1.0 and factors are strictly
//! increasing with the level index.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{imageops, RgbaImage};
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;
use tiff::ColorType;
use tracing::debug;

use crate::error::{Result, SlideNavError};
use crate::level;
use crate::source::{resize_to_bound, LevelInfo};

/// Minimum growth of the downsample factor between consecutive pyramid
/// levels. Label and macro pages that are merely small fail this check.
const MIN_LEVEL_SHRINK: f64 = 1.5;

pub struct PyramidSlide {
    decoder: Decoder<BufReader<File>>,
    levels: Vec<LevelInfo>,
    /// File IFD index backing each pyramid level.
    ifd_indices: Vec<usize>,
    magnification: Option<String>,
    /// Most recently decoded level, kept so pans at a fixed level do not
    /// re-decode.
    cache: Option<(usize, RgbaImage)>,
}

impl PyramidSlide {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut decoder = Decoder::new(BufReader::new(file))?.with_limits(Limits::unlimited());

        let (base_w, base_h) = decoder.dimensions()?;
        let mut levels: Vec<LevelInfo> = Vec::new();
        let mut ifd_indices = Vec::new();
        let mut ifd = 0usize;

        loop {
            let (w, h) = decoder.dimensions()?;
            let downsample = if levels.is_empty() {
                1.0
            } else {
                // Average of the per-axis ratios; they should be close.
                (base_w as f64 / w as f64 + base_h as f64 / h as f64) / 2.0
            };
            let keep = match levels.last() {
                None => true,
                Some(last) => {
                    w < last.width
                        && h < last.height
                        && downsample > last.downsample * MIN_LEVEL_SHRINK
                }
            };
            if keep {
                levels.push(LevelInfo {
                    index: levels.len(),
                    width: w,
                    height: h,
                    downsample,
                });
                ifd_indices.push(ifd);
            } else {
                debug!("skipping non-pyramid IFD {ifd} ({w}x{h})");
            }

            if !decoder.more_images() {
                break;
            }
            decoder.next_image()?;
            ifd += 1;
        }

        decoder.seek_to_image(0)?;
        let magnification = decoder
            .get_tag_ascii_string(Tag::ImageDescription)
            .ok()
            .and_then(|desc| parse_app_mag(&desc));

        Ok(Self {
            decoder,
            levels,
            ifd_indices,
            magnification,
            cache: None,
        })
    }

    /// Full-resolution (level 0) dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.levels[0].width, self.levels[0].height)
    }

    pub fn levels(&self) -> &[LevelInfo] {
        &self.levels
    }

    pub fn magnification(&self) -> Option<&str> {
        self.magnification.as_deref()
    }

    /// Read the region at `(x, y)` (full-resolution coordinates): selects
    /// the best level for `zoom`, crops the level-local rectangle, and
    /// rescales to `round(width*zoom)` x `round(height*zoom)`.
    pub fn read_region(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        zoom: f64,
    ) -> Result<RgbaImage> {
        let level = level::best_level(&self.levels, zoom);
        let info = self.levels[level];

        let level_x = ((x as f64 / info.downsample) as u32).min(info.width.saturating_sub(1));
        let level_y = ((y as f64 / info.downsample) as u32).min(info.height.saturating_sub(1));
        let level_w = ((width as f64 / info.downsample) as u32).max(1);
        let level_h = ((height as f64 / info.downsample) as u32).max(1);
        let crop_w = (level_x + level_w).min(info.width) - level_x;
        let crop_h = (level_y + level_h).min(info.height) - level_y;

        let full = self.level_image(level)?;
        let region = imageops::crop_imm(full, level_x, level_y, crop_w, crop_h).to_image();

        let target_w = ((width as f64 * zoom).round() as u32).max(1);
        let target_h = ((height as f64 * zoom).round() as u32).max(1);
        Ok(imageops::resize(
            &region,
            target_w,
            target_h,
            imageops::FilterType::Lanczos3,
        ))
    }

    /// Thumbnail built from the lowest-detail level.
    pub fn thumbnail(&mut self, max_dim: u32) -> Result<RgbaImage> {
        let last = self.levels.len() - 1;
        let image = self.level_image(last)?;
        Ok(resize_to_bound(image, max_dim))
    }

    fn level_image(&mut self, level: usize) -> Result<&RgbaImage> {
        let cached = matches!(self.cache, Some((l, _)) if l == level);
        if !cached {
            let image = self.decode_level(level)?;
            self.cache = Some((level, image));
        }
        let (_, image) = self.cache.as_ref().expect("cache filled above");
        Ok(image)
    }

    fn decode_level(&mut self, level: usize) -> Result<RgbaImage> {
        self.decoder.seek_to_image(self.ifd_indices[level])?;
        let (w, h) = self.decoder.dimensions()?;
        let color = self.decoder.colortype()?;
        let data = self.decoder.read_image()?;
        rgba_from_decoded(w, h, color, data)
    }
}

/// Extract the objective magnification from an ImageDescription string,
/// e.g. "Aperio ...|AppMag = 20|..." yields "20".
pub fn parse_app_mag(description: &str) -> Option<String> {
    let start = description.find("AppMag")?;
    let rest = &description[start + "AppMag".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    let value = &rest[..end];
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn rgba_from_decoded(
    w: u32,
    h: u32,
    color: ColorType,
    data: DecodingResult,
) -> Result<RgbaImage> {
    let samples: Vec<u8> = match data {
        DecodingResult::U8(buf) => buf,
        DecodingResult::U16(buf) => buf.into_iter().map(|v| (v >> 8) as u8).collect(),
        _ => {
            return Err(SlideNavError::UnsupportedPixelLayout(
                "unsupported sample format".into(),
            ))
        }
    };

    let pixels = match color {
        ColorType::Gray(_) => {
            let mut out = Vec::with_capacity(samples.len() * 4);
            for v in samples {
                out.extend_from_slice(&[v, v, v, 255]);
            }
            out
        }
        ColorType::RGB(_) => {
            let mut out = Vec::with_capacity(samples.len() / 3 * 4);
            for px in samples.chunks_exact(3) {
                out.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
            out
        }
        ColorType::RGBA(_) => samples,
        other => {
            return Err(SlideNavError::UnsupportedPixelLayout(format!(
                "{other:?}"
            )))
        }
    };

    RgbaImage::from_raw(w, h, pixels).ok_or_else(|| {
        SlideNavError::UnsupportedPixelLayout("pixel buffer does not match dimensions".into())
    })
}
