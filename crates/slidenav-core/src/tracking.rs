//! Visited-region tracking: one boolean occupancy grid per zoom bucket,
//! covering the full-resolution image in fixed-size cells.
//!
//! Grids are sized at load time and never change shape afterwards;
//! recording only ever sets cells, clearing is an explicit user action.

use ndarray::Array2;

use crate::consts::{TRACKING_BUCKETS, TRACKING_CELL_SIZE};
use crate::viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBucket {
    pub percent: u32,
    pub color: [u8; 4],
}

/// Buckets in declaration order. This order is both the tie-break order
/// for bucket selection and the layering order on the navigation map.
pub fn buckets() -> [ZoomBucket; 4] {
    TRACKING_BUCKETS.map(|(percent, color)| ZoomBucket { percent, color })
}

/// Index of the bucket nearest to a zoom percentage; the earlier declared
/// bucket wins ties.
pub fn bucket_for_percent(percent: u32) -> usize {
    let mut best = 0;
    let mut min_diff = percent.abs_diff(TRACKING_BUCKETS[0].0);
    for (index, (bucket_percent, _)) in TRACKING_BUCKETS.iter().enumerate().skip(1) {
        let diff = percent.abs_diff(*bucket_percent);
        if diff < min_diff {
            min_diff = diff;
            best = index;
        }
    }
    best
}

pub struct TrackingState {
    /// One grid per bucket, indexed `[row, col]`.
    grids: Vec<Array2<bool>>,
    cols: usize,
    rows: usize,
}

impl TrackingState {
    /// Allocate empty grids covering an image of the given dimensions.
    pub fn new(dims: (u32, u32)) -> Self {
        let cols = dims.0.div_ceil(TRACKING_CELL_SIZE) as usize;
        let rows = dims.1.div_ceil(TRACKING_CELL_SIZE) as usize;
        Self {
            grids: (0..TRACKING_BUCKETS.len())
                .map(|_| Array2::from_elem((rows, cols), false))
                .collect(),
            cols,
            rows,
        }
    }

    /// Grid shape as (cols, rows).
    pub fn shape(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Mark the currently visible region as visited in the bucket nearest
    /// to the current zoom percentage.
    pub fn record_visit(&mut self, viewport: &ViewportState, dims: (u32, u32)) {
        let percent = viewport.zoom_percent();
        let bucket = bucket_for_percent(percent);
        let (view_w, view_h) = viewport.view_size(dims);

        let cell = TRACKING_CELL_SIZE as f64;
        let c0 = ((viewport.offset_x / cell) as usize).min(self.cols - 1);
        let r0 = ((viewport.offset_y / cell) as usize).min(self.rows - 1);
        let c1 = (((viewport.offset_x + view_w) / cell) as usize).min(self.cols - 1);
        let r1 = (((viewport.offset_y + view_h) / cell) as usize).min(self.rows - 1);

        for row in r0..=r1 {
            for col in c0..=c1 {
                self.grids[bucket][[row, col]] = true;
            }
        }
    }

    /// Reset every bucket's grid to unvisited.
    pub fn clear(&mut self) {
        for grid in &mut self.grids {
            grid.fill(false);
        }
    }

    pub fn is_visited(&self, bucket: usize, col: usize, row: usize) -> bool {
        self.grids[bucket][[row, col]]
    }

    /// Visited cells per bucket for the legend readout.
    pub fn visited_count(&self, bucket: usize) -> usize {
        self.grids[bucket].iter().filter(|&&v| v).count()
    }

    /// Visited cells as `(bucket, col, row, color)` in bucket declaration
    /// order, so later buckets overlay earlier ones when painted in
    /// sequence.
    pub fn visited_cells(&self) -> impl Iterator<Item = (usize, usize, usize, [u8; 4])> + '_ {
        self.grids.iter().enumerate().flat_map(|(bucket, grid)| {
            let color = TRACKING_BUCKETS[bucket].1;
            grid.indexed_iter()
                .filter(|(_, &visited)| visited)
                .map(move |((row, col), _)| (bucket, col, row, color))
        })
    }
}
