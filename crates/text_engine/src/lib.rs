//! Text Engine - Text metrics, fonts, and word wrapping
//!
//! This crate measures text in pixels, wraps it to a width, and resolves the
//! font faces used for measuring and painting.
//!
//! # Modules
//!
//! - `metrics`: The `TextMetrics` contract and its heuristic fallback
//! - `font`: Font faces, sized fonts, and the per-role `FontSet`
//! - `shaper`: Glyph positioning using rustybuzz
//! - `wrap`: Greedy word wrapping with a character-level fallback
//! - `discovery`: Probing candidate font paths and the system monospace face

mod error;
mod font;
mod metrics;
mod shaper;
mod wrap;
pub mod discovery;

pub use error::*;
pub use font::*;
pub use metrics::*;
pub use shaper::*;
pub use wrap::*;

pub use discovery::FontProbe;

// Glyph outlines are read through ttf-parser by the renderer
pub use rustybuzz::ttf_parser;
