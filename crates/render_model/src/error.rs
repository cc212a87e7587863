//! Error types for rendering and export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Font unavailable for painting: {0}")]
    FontUnavailable(String),

    #[error("{format} encoding failed: {reason}")]
    EncodeFailed { format: String, reason: String },

    #[error("Background image error: {0}")]
    Background(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
