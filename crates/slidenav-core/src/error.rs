use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideNavError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("Unsupported pixel layout: {0}")]
    UnsupportedPixelLayout(String),

    #[error("Sector ({col},{row}) out of bounds (valid: col 0-{max_col}, row 0-{max_row})")]
    SectorOutOfBounds {
        col: u32,
        row: u32,
        max_col: u32,
        max_row: u32,
    },

    #[error("Invalid sector input: {0}")]
    InvalidSectorInput(String),
}

pub type Result<T> = std::result::Result<T, SlideNavError>;
