use std::path::PathBuf;

use slidenav_core::compositor;
use slidenav_core::navmap::NavMap;
use slidenav_core::source::ImageSource;
use slidenav_core::tracking::TrackingState;
use slidenav_core::viewport::ViewportState;
use tracing::{error, info};

use crate::convert::rgba_to_color_image;
use crate::panels;

const LOG_CAPACITY: usize = 100;

pub struct MapViewerApp {
    pub source: Option<ImageSource>,
    pub file_path: Option<PathBuf>,
    pub viewport: ViewportState,
    pub tracking: Option<TrackingState>,
    pub navmap: Option<NavMap>,
    pub texture: Option<egui::TextureHandle>,
    pub map_texture: Option<egui::TextureHandle>,
    pub log_messages: Vec<String>,
    /// Set by interaction handlers; the region is re-rendered once per
    /// frame at most.
    pub needs_refresh: bool,
}

impl Default for MapViewerApp {
    fn default() -> Self {
        Self {
            source: None,
            file_path: None,
            viewport: ViewportState::default(),
            tracking: None,
            navmap: None,
            texture: None,
            map_texture: None,
            log_messages: Vec::new(),
            needs_refresh: false,
        }
    }
}

impl MapViewerApp {
    pub fn add_log(&mut self, message: String) {
        self.log_messages.push(message);
        if self.log_messages.len() > LOG_CAPACITY {
            self.log_messages.remove(0);
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.source.as_ref().map(|s| s.dimensions())
    }

    /// Open a new image: fresh viewport, empty tracking grids, new
    /// navigation thumbnail. The previous source is released first, so a
    /// failed open leaves the app in the empty state.
    pub fn load_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.source = None;
        self.tracking = None;
        self.navmap = None;
        self.texture = None;
        self.map_texture = None;
        self.file_path = None;

        match ImageSource::open(&path) {
            Ok(mut source) => {
                let dims = source.dimensions();
                self.viewport.reset(dims);
                match NavMap::build(&mut source) {
                    Ok(map) => self.navmap = Some(map),
                    Err(err) => {
                        self.add_log(format!("ERROR: could not build map: {err}"));
                        error!("map build failed: {err}");
                    }
                }
                self.tracking = Some(TrackingState::new(dims));
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

    /// Re-render the visible region, record the visit, and rebuild the
    /// composited map texture.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let dims = source.dimensions();

        match compositor::render_region(source, &mut self.viewport) {
            Ok(region) => {
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

        if let Some(tracking) = self.tracking.as_mut() {
            tracking.record_visit(&self.viewport, dims);
        }
        self.update_map_texture(ctx);
    }

    /// Redraw the navigation thumbnail with the tracking overlay.
    pub fn update_map_texture(&mut self, ctx: &egui::Context) {
        if let (Some(navmap), Some(tracking)) = (&self.navmap, &self.tracking) {
            let composited = navmap.composited(tracking);
            self.map_texture = Some(ctx.load_texture(
                "navmap",
                rgba_to_color_image(&composited),
                egui::TextureOptions::NEAREST,
            ));
        }
    }

    pub fn clear_tracking(&mut self, ctx: &egui::Context) {
        if let Some(tracking) = self.tracking.as_mut() {
            tracking.clear();
            self.add_log("Tracking cleared".into());
        }
        self.update_map_texture(ctx);
    }
}

impl eframe::App for MapViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar::show(ctx, self);
        panels::map_panel::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.needs_refresh {
            self.needs_refresh = false;
            self.refresh(ctx);
        }
    }
}
