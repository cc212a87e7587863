//! Layout Engine - Card layout from a question record
//!
//! This crate turns a question record into a `LayoutPlan`: a top-to-bottom
//! list of positioned text blocks, a syntax-tagged code block, and option
//! boxes that fit the canvas.

mod classifier;
mod config;
mod engine;
mod notice;
mod plan;

pub use classifier::*;
pub use config::*;
pub use engine::*;
pub use notice::*;
pub use plan::*;
