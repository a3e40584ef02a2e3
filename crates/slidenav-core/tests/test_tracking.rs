use slidenav_core::consts::TRACKING_BUCKETS;
use slidenav_core::tracking::{bucket_for_percent, buckets, TrackingState};
use slidenav_core::viewport::ViewportState;

const DIMS: (u32, u32) = (20000, 15000);

fn viewport(zoom: f64, offset_x: f64, offset_y: f64) -> ViewportState {
    let mut vp = ViewportState {
        canvas_w: 1000.0,
        canvas_h: 800.0,
        offset_x,
        offset_y,
        ..Default::default()
    };
    vp.set_zoom(zoom, DIMS);
    vp
}

#[test]
fn nearest_bucket_with_earlier_tie_break() {
    assert_eq!(bucket_for_percent(5), 0);
    assert_eq!(bucket_for_percent(42), 1);
    assert_eq!(bucket_for_percent(61), 2);
    assert_eq!(bucket_for_percent(100), 3);
    // 50 is equidistant from 40 and 60; 70 from 60 and 80.
    assert_eq!(bucket_for_percent(50), 1);
    assert_eq!(bucket_for_percent(70), 2);
    // 25 is equidistant from 10 and 40.
    assert_eq!(bucket_for_percent(25), 0);
}

#[test]
fn bucket_table_matches_constants() {
    let b = buckets();
    assert_eq!(b.len(), TRACKING_BUCKETS.len());
    for (bucket, (percent, color)) in b.iter().zip(TRACKING_BUCKETS) {
        assert_eq!(bucket.percent, percent);
        assert_eq!(bucket.color, color);
    }
}

#[test]
fn grid_shape_is_fixed_by_dimensions() {
    let tracking = TrackingState::new(DIMS);
    assert_eq!(tracking.shape(), (200, 150));

    // Non-divisible dimensions round up.
    let tracking = TrackingState::new((1050, 999));
    assert_eq!(tracking.shape(), (11, 10));
}

#[test]
fn record_marks_the_visible_cell_rect() {
    let mut tracking = TrackingState::new(DIMS);
    // Zoom 40%: view is 2500x2000 image pixels starting at (1000, 500).
    let vp = viewport(0.4, 1000.0, 500.0);
    tracking.record_visit(&vp, DIMS);

    // Rect covers cells (10..=35, 5..=25) in bucket 1 (40%).
    assert!(tracking.is_visited(1, 10, 5));
    assert!(tracking.is_visited(1, 35, 25));
    assert!(tracking.is_visited(1, 20, 15));
    assert!(!tracking.is_visited(1, 9, 5));
    assert!(!tracking.is_visited(1, 36, 5));
    assert!(!tracking.is_visited(1, 10, 26));
    // Other buckets stay untouched.
    for bucket in [0, 2, 3] {
        assert_eq!(tracking.visited_count(bucket), 0);
    }
    assert_eq!(tracking.visited_count(1), 26 * 21);
}

#[test]
fn record_clamps_at_image_edge() {
    let mut tracking = TrackingState::new(DIMS);
    let mut vp = viewport(0.05, 0.0, 0.0);
    vp.pan(1e9, 1e9, DIMS);
    tracking.record_visit(&vp, DIMS);
    assert!(tracking.is_visited(0, 199, 149));
}

#[test]
fn recording_is_monotonic_until_cleared() {
    let mut tracking = TrackingState::new(DIMS);
    tracking.record_visit(&viewport(1.0, 0.0, 0.0), DIMS);
    let count = tracking.visited_count(3);
    assert!(count > 0);

    // Re-visiting elsewhere only ever adds cells.
    tracking.record_visit(&viewport(1.0, 5000.0, 5000.0), DIMS);
    assert!(tracking.visited_count(3) >= count);

    tracking.clear();
    for bucket in 0..TRACKING_BUCKETS.len() {
        assert_eq!(tracking.visited_count(bucket), 0);
    }
}

#[test]
fn visited_cells_iterates_in_bucket_order() {
    let mut tracking = TrackingState::new(DIMS);
    tracking.record_visit(&viewport(0.1, 0.0, 0.0), DIMS);
    tracking.record_visit(&viewport(0.8, 0.0, 0.0), DIMS);

    let cells: Vec<_> = tracking.visited_cells().collect();
    assert!(!cells.is_empty());
    let buckets_seen: Vec<usize> = cells.iter().map(|&(b, ..)| b).collect();
    let mut sorted = buckets_seen.clone();
    sorted.sort_unstable();
    assert_eq!(buckets_seen, sorted);
    assert!(buckets_seen.contains(&0));
    assert!(buckets_seen.contains(&3));
}
