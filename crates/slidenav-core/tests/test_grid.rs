mod common;

use approx::assert_relative_eq;
use slidenav_core::compositor;
use slidenav_core::error::SlideNavError;
use slidenav_core::grid::GridConfig;
use slidenav_core::source::ImageSource;
use slidenav_core::viewport::ViewportState;
use tempfile::TempDir;

const DIMS: (u32, u32) = (20000, 15000);

fn grid(cell_size: u32) -> GridConfig {
    GridConfig {
        cell_size,
        ..Default::default()
    }
}

#[test]
fn grid_shape_uses_ceiling_division() {
    let g = grid(5000);
    assert_eq!(g.cols(DIMS), 4);
    assert_eq!(g.rows(DIMS), 3);

    // Partial edge cells count as full sectors.
    let g = grid(3000);
    assert_eq!(g.cols(DIMS), 7);
    assert_eq!(g.rows(DIMS), 5);
}

#[test]
fn sector_at_floors_coordinates() {
    let g = grid(5000);
    assert_eq!(g.sector_at(0.0, 0.0), (0, 0));
    assert_eq!(g.sector_at(4999.9, 4999.9), (0, 0));
    assert_eq!(g.sector_at(5000.0, 10000.0), (1, 2));
    assert_eq!(g.sector_at(19999.0, 14999.0), (3, 2));
}

#[test]
fn go_to_sector_centers_cell_midpoint() {
    let g = grid(5000);
    let mut vp = ViewportState {
        canvas_w: 1000.0,
        canvas_h: 800.0,
        ..Default::default()
    };
    g.go_to_sector(&mut vp, DIMS, 2, 1).unwrap();
    // Cell (2,1) midpoint is (12500, 7500); view is 1000x800 at zoom 1.
    assert_relative_eq!(vp.offset_x, 12000.0);
    assert_relative_eq!(vp.offset_y, 7100.0);
    assert_relative_eq!(vp.center(DIMS).0, 12500.0);
    assert_relative_eq!(vp.center(DIMS).1, 7500.0);
}

#[test]
fn go_to_edge_sector_clamps() {
    let g = grid(5000);
    let mut vp = ViewportState {
        canvas_w: 1000.0,
        canvas_h: 800.0,
        ..Default::default()
    };
    // At zoom 0.1 the view is 10000x8000; centering cell (3,2) at
    // (17500, 12500) would overshoot, so the offset clamps to the edge.
    vp.set_zoom(0.1, DIMS);
    g.go_to_sector(&mut vp, DIMS, 3, 2).unwrap();
    assert_relative_eq!(vp.offset_x, 10000.0);
    assert_relative_eq!(vp.offset_y, 7000.0);
}

#[test]
fn sector_navigation_renders_the_centered_region() {
    let dir = TempDir::new().unwrap();
    let path = common::solid_png(&dir, "flat.png", 2000, 1500, [90, 90, 90, 255]);
    let mut source = ImageSource::open(&path).unwrap();
    let dims = source.dimensions();

    let g = grid(500);
    assert_eq!(g.cols(dims), 4);
    assert_eq!(g.rows(dims), 3);
    assert_eq!(g.cols(dims) * g.rows(dims), 12);

    let mut vp = ViewportState {
        canvas_w: 400.0,
        canvas_h: 300.0,
        ..Default::default()
    };
    g.go_to_sector(&mut vp, dims, 2, 1).unwrap();
    assert_relative_eq!(vp.center(dims).0, 1250.0);
    assert_relative_eq!(vp.center(dims).1, 750.0);

    let region = compositor::render_region(&mut source, &mut vp).unwrap();
    assert_eq!(region.dimensions(), (400, 300));
}

#[test]
fn out_of_range_sector_is_rejected_without_state_change() {
    let g = grid(5000);
    let mut vp = ViewportState {
        canvas_w: 1000.0,
        canvas_h: 800.0,
        ..Default::default()
    };
    g.go_to_sector(&mut vp, DIMS, 1, 1).unwrap();
    let before = vp;

    for (col, row) in [(4, 0), (0, 3), (99, 99)] {
        let err = g.go_to_sector(&mut vp, DIMS, col, row).unwrap_err();
        match err {
            SlideNavError::SectorOutOfBounds {
                max_col, max_row, ..
            } => {
                assert_eq!(max_col, 3);
                assert_eq!(max_row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(vp, before);
    }
}
