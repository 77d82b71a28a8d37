//! Error types for carousel

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CarouselError>;

/// Main error type for carousel
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Rendering(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixmap creation failed for {width}x{height}")]
    PixmapCreationFailed { width: u32, height: u32 },

    #[error("Malformed bitmap: {width}x{height} {format:?} needs {expected} bytes, got {actual}")]
    MalformedBitmap {
        width: u32,
        height: u32,
        format: crate::types::BitmapFormat,
        expected: usize,
        actual: usize,
    },

    #[error("Image decoding failed: {0}")]
    ImageDecode(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: the slide sequence is empty")]
    NothingToExport,

    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Archive write failed: {0}")]
    WriteFailed(String),
}
