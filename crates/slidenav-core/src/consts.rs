/// Minimum zoom factor (5%).
pub const MIN_ZOOM: f64 = 0.05;

/// Maximum zoom factor (1000%).
pub const MAX_ZOOM: f64 = 10.0;

/// Multiplicative step applied by a single zoom-in or zoom-out.
pub const ZOOM_STEP: f64 = 1.5;

/// Sector plaque labels are hidden below this zoom factor.
pub const SECTOR_LABEL_MIN_ZOOM: f64 = 0.3;

/// Canvas-pixel margin near the origin inside which line labels are
/// suppressed (they would collide with the opposite axis labels).
pub const LINE_LABEL_MARGIN: f64 = 30.0;

/// Default navigation grid cell size in full-resolution pixels.
/// Sized for whole-slide images; small images get a 1-2 cell grid.
pub const DEFAULT_GRID_CELL_SIZE: u32 = 5000;

/// Grid cell sizes offered as presets by the grid viewer.
pub const GRID_CELL_PRESETS: [u32; 4] = [1000, 2000, 5000, 10000];

/// Edge length of a tracking occupancy cell in full-resolution pixels.
pub const TRACKING_CELL_SIZE: u32 = 100;

/// Zoom-percent buckets with their overlay colors (RGBA). Declaration
/// order is the tie-break order for bucket selection and the layering
/// order on the navigation map.
pub const TRACKING_BUCKETS: [(u32, [u8; 4]); 4] = [
    (10, [0, 200, 0, 100]),    // green - low zoom
    (40, [0, 100, 255, 100]),  // blue
    (60, [255, 165, 0, 100]),  // orange
    (80, [255, 0, 0, 100]),    // red - high zoom
];

/// Quick-zoom presets (percent) offered by the tracking viewer.
pub const QUICK_ZOOM_PERCENTS: [u32; 4] = [10, 40, 60, 80];

/// Longest side of the navigation thumbnail, in pixels.
pub const THUMBNAIL_MAX_DIM: u32 = 290;

/// Extensions tried against the pyramidal decoder before falling back to
/// the flat decoder.
pub const SLIDE_EXTENSIONS: [&str; 9] = [
    "ndpi", "svs", "vms", "vmu", "scn", "mrxs", "tif", "tiff", "bif",
];

/// Flat raster extensions accepted by the open dialog.
pub const FLAT_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];
