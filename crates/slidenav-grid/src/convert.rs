use image::RgbaImage;

/// Convert a decoded RGBA buffer to an egui ColorImage for texture upload.
pub fn rgba_to_color_image(image: &RgbaImage) -> egui::ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}
