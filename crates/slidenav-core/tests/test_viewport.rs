use approx::assert_relative_eq;
use slidenav_core::consts::{MAX_ZOOM, MIN_ZOOM};
use slidenav_core::viewport::ViewportState;

const DIMS: (u32, u32) = (20000, 15000);

fn viewport(canvas_w: f64, canvas_h: f64) -> ViewportState {
    ViewportState {
        canvas_w,
        canvas_h,
        ..Default::default()
    }
}

#[test]
fn offset_stays_inside_image_across_pan_and_zoom() {
    let mut vp = viewport(1000.0, 800.0);
    for step in 0..50 {
        if step % 7 == 0 {
            vp.zoom_in(DIMS);
        }
        if step % 11 == 0 {
            vp.zoom_out(DIMS);
        }
        vp.pan(919.0, -637.0, DIMS);

        let (view_w, view_h) = vp.view_size(DIMS);
        assert!(vp.offset_x >= 0.0);
        assert!(vp.offset_y >= 0.0);
        assert!(vp.offset_x + view_w <= DIMS.0 as f64 + 1e-9);
        assert!(vp.offset_y + view_h <= DIMS.1 as f64 + 1e-9);
    }
}

#[test]
fn read_rect_never_exceeds_image() {
    let mut vp = viewport(1000.0, 800.0);
    vp.set_zoom(MIN_ZOOM, DIMS);
    vp.pan(1e9, 1e9, DIMS);
    let (x, y, w, h) = vp.read_rect(DIMS);
    assert!(x + w <= DIMS.0);
    assert!(y + h <= DIMS.1);

    // Small image: the whole image fits in the canvas.
    let small = (300, 200);
    let mut vp = viewport(1000.0, 800.0);
    vp.clamp(small);
    assert_eq!(vp.read_rect(small), (0, 0, 300, 200));
}

#[test]
fn zoom_saturates_at_bounds() {
    let mut vp = viewport(1000.0, 800.0);
    for _ in 0..40 {
        vp.zoom_in(DIMS);
    }
    assert_relative_eq!(vp.zoom, MAX_ZOOM);
    for _ in 0..80 {
        vp.zoom_out(DIMS);
    }
    assert_relative_eq!(vp.zoom, MIN_ZOOM);
}

#[test]
fn pan_moves_by_canvas_delta_over_zoom() {
    let mut vp = viewport(1000.0, 800.0);
    vp.set_zoom(2.0, DIMS);
    vp.center_on(10000.0, 7500.0, DIMS);
    let before = (vp.offset_x, vp.offset_y);
    vp.pan(100.0, -50.0, DIMS);
    assert_relative_eq!(vp.offset_x, before.0 + 50.0);
    assert_relative_eq!(vp.offset_y, before.1 - 25.0);
}

#[test]
fn center_on_clamps_near_edges() {
    let mut vp = viewport(1000.0, 800.0);
    vp.center_on(0.0, 0.0, DIMS);
    assert_relative_eq!(vp.offset_x, 0.0);
    assert_relative_eq!(vp.offset_y, 0.0);

    vp.center_on(10000.0, 7500.0, DIMS);
    assert_relative_eq!(vp.offset_x, 9500.0);
    assert_relative_eq!(vp.offset_y, 7100.0);

    vp.center_on(1e9, 1e9, DIMS);
    let (view_w, view_h) = vp.view_size(DIMS);
    assert_relative_eq!(vp.offset_x, DIMS.0 as f64 - view_w);
    assert_relative_eq!(vp.offset_y, DIMS.1 as f64 - view_h);
}

#[test]
fn zoom_percent_rounds() {
    let mut vp = viewport(1000.0, 800.0);
    vp.set_zoom(0.424, DIMS);
    assert_eq!(vp.zoom_percent(), 42);
    vp.set_zoom_percent(40, DIMS);
    assert_relative_eq!(vp.zoom, 0.4);
    assert_eq!(vp.zoom_percent(), 40);
}

#[test]
fn reset_restores_origin_and_unit_zoom() {
    let mut vp = viewport(1000.0, 800.0);
    vp.set_zoom(3.0, DIMS);
    vp.pan(5000.0, 4000.0, DIMS);
    vp.reset(DIMS);
    assert_relative_eq!(vp.zoom, 1.0);
    assert_relative_eq!(vp.offset_x, 0.0);
    assert_relative_eq!(vp.offset_y, 0.0);
}

#[test]
fn canvas_resize_reclamps_offset() {
    let mut vp = viewport(500.0, 400.0);
    vp.center_on(19800.0, 14800.0, DIMS);
    vp.set_canvas_size(2000.0, 1600.0, DIMS);
    let (view_w, view_h) = vp.view_size(DIMS);
    assert!(vp.offset_x + view_w <= DIMS.0 as f64 + 1e-9);
    assert!(vp.offset_y + view_h <= DIMS.1 as f64 + 1e-9);
}
