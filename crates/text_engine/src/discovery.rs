//! Font Discovery Module
//!
//! Resolves the face used for every role on a card. Candidate paths are tried
//! in order; if none loads, the system's monospace face is selected through
//! font-kit. Callers fall back to synthetic metrics when both fail.

use crate::{FontFace, Result, TextError};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use std::path::PathBuf;

/// Font files tried before asking the system
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "assets/font.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
    "cour.ttf",
    "arial.ttf",
];

/// Ordered font path probe
#[derive(Debug, Clone)]
pub struct FontProbe {
    candidates: Vec<PathBuf>,
    use_system_fallback: bool,
}

impl Default for FontProbe {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from))
    }
}

impl FontProbe {
    pub fn new(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
            use_system_fallback: true,
        }
    }

    /// Disable the font-kit system lookup
    pub fn without_system_fallback(mut self) -> Self {
        self.use_system_fallback = false;
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Return the first usable face, or `None` if nothing loads
    pub fn resolve(&self) -> Option<FontFace> {
        for path in &self.candidates {
            if !path.exists() {
                continue;
            }
            match FontFace::load(path) {
                Ok(face) => {
                    tracing::info!("Using font: {}", path.display());
                    return Some(face);
                }
                Err(e) => {
                    tracing::debug!("Skipping font {}: {}", path.display(), e);
                }
            }
        }

        if self.use_system_fallback {
            match system_monospace() {
                Ok(face) => {
                    tracing::info!("Using system monospace font: {}", face.name());
                    return Some(face);
                }
                Err(e) => tracing::debug!("System font lookup failed: {}", e),
            }
        }

        tracing::warn!("No usable font found; falling back to synthetic metrics");
        None
    }
}

/// Select the system's preferred monospace face using font-kit
pub fn system_monospace() -> Result<FontFace> {
    let handle = SystemSource::new()
        .select_best_match(&[FamilyName::Monospace], &Properties::new())
        .map_err(|e| TextError::FontNotFound(format!("monospace: {}", e)))?;

    match handle {
        Handle::Path { path, font_index } => FontFace::load_indexed(&path, font_index),
        Handle::Memory { bytes, font_index } => {
            FontFace::from_bytes("system monospace", bytes.as_ref().clone(), font_index)
        }
    }
}
