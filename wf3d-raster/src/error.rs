//! Error types for raster output.

use thiserror::Error;

/// Errors raised while loading fonts or encoding and saving a raster canvas.
#[derive(Error, Debug)]
pub enum RasterError {
    /// The image backend failed to encode or write the canvas.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// A file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Font data could not be parsed.
    #[error("invalid font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
