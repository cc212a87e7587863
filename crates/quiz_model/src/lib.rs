//! Quiz Model - Question records and answer metadata
//!
//! This crate holds the data handed to the layout core by the content source
//! and the metadata handed onward to the video compositor.
//!
//! # Modules
//!
//! - `record`: The question record and answer letters
//! - `reveal`: Correct-answer lookup and the timed reveal overlay

mod error;
mod record;
mod reveal;

pub use error::*;
pub use record::*;
pub use reveal::*;
