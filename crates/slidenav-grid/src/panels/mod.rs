pub mod sidebar;
pub mod status;
pub mod toolbar;
pub mod viewport;
