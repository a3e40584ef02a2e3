use std::path::PathBuf;

use slidenav_core::compositor::{self, GridOverlay};
use slidenav_core::error::SlideNavError;
use slidenav_core::grid::GridConfig;
use slidenav_core::source::ImageSource;
use slidenav_core::viewport::ViewportState;
use tracing::{error, info};

use crate::convert::rgba_to_color_image;
use crate::panels;

const LOG_CAPACITY: usize = 100;

pub struct GridViewerApp {
    pub source: Option<ImageSource>,
    pub file_path: Option<PathBuf>,
    pub viewport: ViewportState,
    pub grid: GridConfig,
    pub overlay: GridOverlay,
    pub texture: Option<egui::TextureHandle>,
    pub sector_col_input: String,
    pub sector_row_input: String,
    pub log_messages: Vec<String>,
    /// Set by interaction handlers; the region is re-rendered once per
    /// frame at most.
    pub needs_refresh: bool,
}

impl Default for GridViewerApp {
    fn default() -> Self {
        Self {
            source: None,
            file_path: None,
            viewport: ViewportState::default(),
            grid: GridConfig::default(),
            overlay: GridOverlay::default(),
            texture: None,
            sector_col_input: String::new(),
            sector_row_input: String::new(),
            log_messages: Vec::new(),
            needs_refresh: false,
        }
    }
}

impl GridViewerApp {
    pub fn add_log(&mut self, message: String) {
        self.log_messages.push(message);
        if self.log_messages.len() > LOG_CAPACITY {
            self.log_messages.remove(0);
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(|s| s.dimensions())
    }

    /// Open a new image. The previous source is released first, so a
    /// failed open leaves the app in the empty state.
    pub fn load_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.source = None;
        self.texture = None;
        self.overlay = GridOverlay::default();
        self.file_path = None;

        match ImageSource::open(&path) {
            Ok(source) => {
                let dims = source.dimensions();
                self.viewport.reset(dims);
                self.add_log(format!(
                    "Opened: {} ({}x{}, {})",
                    path.display(),
                    dims.0,
                    dims.1,
                    source.kind_label()
                ));
                info!("loaded {}", path.display());
                self.file_path = Some(path);
                self.source = Some(source);
                self.refresh(ctx);
            }
            Err(err) => {
                self.add_log(format!("ERROR: could not open {}: {err}", path.display()));
                error!("open of {} failed: {err}", path.display());
            }
        }
    }

    /// Re-render the visible region and recompute the grid overlay.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let dims = source.dimensions();

        match compositor::render_region(source, &mut self.viewport) {
            Ok(region) => {
                let (w, h) = region.dimensions();
                self.overlay = compositor::grid_overlay(
                    &self.viewport,
                    &self.grid,
                    dims,
                    w as f32,
                    h as f32,
                );
                self.texture = Some(ctx.load_texture(
                    "region",
                    rgba_to_color_image(&region),
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(err) => {
                self.add_log(format!("ERROR: render failed: {err}"));
                error!("region render failed: {err}");
            }
        }
    }

    /// Jump to the sector typed into the navigator inputs.
    pub fn go_to_selected_sector(&mut self) {
        let Some(dims) = self.dimensions() else {
            return;
        };

        let col = self.sector_col_input.trim().parse::<u32>();
        let row = self.sector_row_input.trim().parse::<u32>();
        let (col, row) = match (col, row) {
            (Ok(col), Ok(row)) => (col, row),
            _ => {
                let err = SlideNavError::InvalidSectorInput(format!(
                    "'{}', '{}' (expected non-negative numbers)",
                    self.sector_col_input.trim(),
                    self.sector_row_input.trim()
                ));
                self.add_log(format!("ERROR: {err}"));
                return;
            }
        };

        match self.grid.go_to_sector(&mut self.viewport, dims, col, row) {
            Ok(()) => {
                self.add_log(format!("Moved to sector ({col},{row})"));
                self.needs_refresh = true;
            }
            Err(err) => self.add_log(format!("ERROR: {err}")),
        }
    }

    /// Sector under the view center, for the toolbar readout.
    pub fn current_sector(&self) -> Option<(u32, u32)> {
        let dims = self.dimensions()?;
        let (cx, cy) = self.viewport.center(dims);
        Some(self.grid.sector_at(cx, cy))
    }

    /// Pyramid level currently rendered, shown next to the zoom label.
    pub fn current_level(&self) -> Option<usize> {
        let source = self.source.as_ref()?;
        source
            .is_pyramid()
            .then(|| source.best_level(self.viewport.zoom))
    }
}

impl eframe::App for GridViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.needs_refresh {
            self.needs_refresh = false;
            self.refresh(ctx);
        }
    }
}
