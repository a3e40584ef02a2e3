pub mod map_panel;
pub mod status;
pub mod toolbar;
pub mod viewport;
