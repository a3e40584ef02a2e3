mod common;

use slidenav_core::compositor::render_region;
use slidenav_core::source::ImageSource;
use slidenav_core::viewport::ViewportState;
use tempfile::TempDir;

fn viewport(zoom: f64, canvas_w: f64, canvas_h: f64) -> ViewportState {
    ViewportState {
        zoom,
        canvas_w,
        canvas_h,
        ..Default::default()
    }
}

#[test]
fn rendered_region_matches_the_canvas() {
    let dir = TempDir::new().unwrap();
    let path = common::solid_png(&dir, "flat.png", 100, 80, [120, 120, 120, 255]);
    let mut source = ImageSource::open(&path).unwrap();

    let mut vp = viewport(1.0, 50.0, 40.0);
    let region = render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (50, 40));

    // Zoomed in, the smaller view upscales back to the canvas size.
    let mut vp = viewport(2.0, 50.0, 40.0);
    let region = render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (50, 40));
}

#[test]
fn small_image_renders_whole_at_its_scaled_size() {
    let dir = TempDir::new().unwrap();
    let path = common::solid_png(&dir, "flat.png", 100, 80, [120, 120, 120, 255]);
    let mut source = ImageSource::open(&path).unwrap();

    // Canvas larger than the image: the view covers the whole image and
    // the bitmap is smaller than the canvas.
    let mut vp = viewport(1.0, 1000.0, 800.0);
    let region = render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (100, 80));

    let mut vp = viewport(0.5, 1000.0, 800.0);
    let region = render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (50, 40));
}

#[test]
fn out_of_range_offset_is_reclamped_before_the_read() {
    let dir = TempDir::new().unwrap();
    let path = common::solid_png(&dir, "flat.png", 100, 80, [120, 120, 120, 255]);
    let mut source = ImageSource::open(&path).unwrap();

    let mut vp = viewport(2.0, 50.0, 40.0);
    vp.offset_x = 1e6;
    vp.offset_y = 1e6;
    let region = render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (50, 40));
    assert!(vp.offset_x <= 100.0);
    assert!(vp.offset_y <= 80.0);
}

#[test]
fn pyramid_region_renders_through_the_level_cache() {
    let dir = TempDir::new().unwrap();
    let path = common::pyramid_tiff(&dir, "slide.tif", &[(400, 300), (200, 150), (100, 75)]);
    let mut source = ImageSource::open(&path).unwrap();

    let mut vp = viewport(0.5, 100.0, 60.0);
    // Repeated renders at the same level hit the cached decode.
    for _ in 0..3 {
        let region = render_region(&mut source, &mut vp).unwrap();
        assert_eq!(region.dimensions(), (100, 60));
        vp.pan(10.0, 5.0, source.dimensions());
    }

    let mut vp = viewport(1.0, 100.0, 60.0);
    let region = render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (100, 60));
}
