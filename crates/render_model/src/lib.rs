//! Render Model - Painting card layouts
//!
//! This crate paints a `LayoutPlan` onto a raster canvas with tiny-skia and
//! encodes the result as PNG or JPEG.

mod background;
mod color;
mod error;
mod export;
mod glyphs;
mod palette;
mod renderer;

pub use background::*;
pub use color::*;
pub use error::*;
pub use export::*;
pub use glyphs::*;
pub use palette::*;
pub use renderer::*;
