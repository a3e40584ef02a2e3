//! Navigation grid over the full-resolution image: fixed-size square
//! cells addressed by zero-based (column, row) sector coordinates.

use crate::consts::DEFAULT_GRID_CELL_SIZE;
use crate::error::{Result, SlideNavError};
use crate::viewport::ViewportState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Cell edge length in full-resolution pixels.
    pub cell_size: u32,
    pub visible: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_GRID_CELL_SIZE,
            visible: true,
        }
    }
}

impl GridConfig {
    /// Number of grid columns; edge cells may be partial.
    pub fn cols(&self, dims: (u32, u32)) -> u32 {
        dims.0.div_ceil(self.cell_size)
    }

    pub fn rows(&self, dims: (u32, u32)) -> u32 {
        dims.1.div_ceil(self.cell_size)
    }

    /// Sector containing a full-resolution point.
    pub fn sector_at(&self, x: f64, y: f64) -> (u32, u32) {
        let col = (x / self.cell_size as f64).floor().max(0.0) as u32;
        let row = (y / self.cell_size as f64).floor().max(0.0) as u32;
        (col, row)
    }

    /// Full-resolution center of a sector cell.
    pub fn sector_center(&self, col: u32, row: u32) -> (f64, f64) {
        let cell = self.cell_size as f64;
        (col as f64 * cell + cell / 2.0, row as f64 * cell + cell / 2.0)
    }

    /// Center the viewport on the given sector.
    ///
    /// An out-of-range sector is rejected with `SectorOutOfBounds` and the
    /// viewport is left untouched.
    pub fn go_to_sector(
        &self,
        viewport: &mut ViewportState,
        dims: (u32, u32),
        col: u32,
        row: u32,
    ) -> Result<()> {
        let cols = self.cols(dims);
        let rows = self.rows(dims);
        if col >= cols || row >= rows {
            return Err(SlideNavError::SectorOutOfBounds {
                col,
                row,
                max_col: cols.saturating_sub(1),
                max_row: rows.saturating_sub(1),
            });
        }
        let (cx, cy) = self.sector_center(col, row);
        viewport.center_on(cx, cy, dims);
        Ok(())
    }
}
