//! Error types for text engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid font data: {0}")]
    InvalidFontData(String),

    #[error("Measurement failed: {0}")]
    MeasurementFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
