pub mod compositor;
pub mod consts;
pub mod error;
pub mod grid;
pub mod level;
pub mod navmap;
pub mod source;
pub mod tracking;
pub mod viewport;
