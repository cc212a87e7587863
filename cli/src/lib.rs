//! Quizcard - Compose quiz card images
//!
//! Ties the record model, text engine, layout engine, and renderer into one
//! pipeline, configured from a settings file.

mod output;
mod pipeline;
mod settings;

pub use output::*;
pub use pipeline::*;
pub use settings::*;
