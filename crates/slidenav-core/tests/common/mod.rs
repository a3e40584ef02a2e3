//! Synthetic fixture builders shared by the integration tests.

use std::fs::File;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;
use tiff::encoder::{colortype, TiffEncoder};

/// Write a solid-color PNG fixture.
pub fn solid_png(dir: &TempDir, name: &str, w: u32, h: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.path().join(name);
    let image = RgbaImage::from_pixel(w, h, Rgba(color));
    image.save(&path).unwrap();
    path
}

/// Write a multi-page TIFF whose pages form a resolution pyramid.
pub fn pyramid_tiff(dir: &TempDir, name: &str, levels: &[(u32, u32)]) -> PathBuf {
    let path = dir.path().join(name);
    let mut encoder = TiffEncoder::new(File::create(&path).unwrap()).unwrap();
    for &(w, h) in levels {
        let data = vec![180u8; (w * h * 3) as usize];
        encoder
            .write_image::<colortype::RGB8>(w, h, &data)
            .unwrap();
    }
    path
}
