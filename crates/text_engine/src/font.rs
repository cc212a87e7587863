//! Font faces and per-role font sets

use crate::{char_count, shape_text, Result, TextError, TextMetrics, TextSize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A parsed-once, shareable font file
#[derive(Clone)]
pub struct FontFace {
    /// Display name (usually the file path)
    name: String,
    /// Raw font file bytes
    data: Arc<Vec<u8>>,
    /// Face index within a collection file
    index: u32,
}

impl FontFace {
    /// Create a face from raw bytes, validating that they parse
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>, index: u32) -> Result<Self> {
        let name = name.into();
        if rustybuzz::Face::from_slice(&data, index).is_none() {
            return Err(TextError::InvalidFontData(format!(
                "{} (face {}) is not a usable font",
                name, index
            )));
        }
        Ok(Self {
            name,
            data: Arc::new(data),
            index,
        })
    }

    /// Load the first face of a font file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_indexed(path, 0)
    }

    /// Load a specific face of a font file or collection
    pub fn load_indexed(path: impl AsRef<Path>, index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        Self::from_bytes(path.display().to_string(), data, index)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the face for shaping or outline extraction
    pub fn parse(&self) -> Result<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, self.index)
            .ok_or_else(|| TextError::InvalidFontData(format!("failed to parse {}", self.name)))
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Synthetic metrics where every character has the same advance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedAdvance {
    /// Width of every character in pixels
    pub advance: f32,
    /// Height of every line in pixels
    pub line_height: f32,
}

/// Where a font's measurements come from
#[derive(Debug, Clone)]
pub enum FontSource {
    /// A real outline font
    Outline(FontFace),
    /// Fixed-advance metrics with no outlines; painted as block glyphs
    Fixed(FixedAdvance),
}

/// A font at a specific pixel size
#[derive(Debug, Clone)]
pub struct Font {
    pub source: FontSource,
    pub size_px: f32,
}

impl Font {
    pub fn new(face: FontFace, size_px: f32) -> Self {
        Self {
            source: FontSource::Outline(face),
            size_px,
        }
    }

    /// A font where each character is `advance` pixels wide
    pub fn fixed(advance: f32, line_height: f32) -> Self {
        Self {
            source: FontSource::Fixed(FixedAdvance {
                advance,
                line_height,
            }),
            size_px: line_height,
        }
    }

    /// Monospace stand-in used when no font file can be found
    pub fn synthetic(size_px: f32) -> Self {
        // Average advance is ~60% of the em
        Self {
            source: FontSource::Fixed(FixedAdvance {
                advance: size_px * 0.6,
                line_height: size_px * 1.2,
            }),
            size_px,
        }
    }

    pub fn face(&self) -> Option<&FontFace> {
        match &self.source {
            FontSource::Outline(face) => Some(face),
            FontSource::Fixed(_) => None,
        }
    }
}

impl TextMetrics for Font {
    fn try_measure(&self, text: &str) -> Result<TextSize> {
        match &self.source {
            FontSource::Outline(face) => {
                let run = shape_text(face, text, self.size_px)?;
                Ok(TextSize::new(run.width, run.line_height()))
            }
            FontSource::Fixed(fixed) => Ok(TextSize::new(
                char_count(text) as f32 * fixed.advance,
                fixed.line_height,
            )),
        }
    }

    fn nominal_height(&self) -> Option<f32> {
        Some(self.size_px)
    }
}

/// The text roles laid out on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontRole {
    Prompt,
    Title,
    Code,
    Option,
}

/// Pixel size for each role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub prompt: f32,
    pub title: f32,
    pub code: f32,
    pub option: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            prompt: 40.0,
            title: 65.0,
            code: 50.0,
            option: 55.0,
        }
    }
}

impl FontSizes {
    pub fn get(&self, role: FontRole) -> f32 {
        match role {
            FontRole::Prompt => self.prompt,
            FontRole::Title => self.title,
            FontRole::Code => self.code,
            FontRole::Option => self.option,
        }
    }
}

/// One font per role, built once and passed by reference to layout and paint
#[derive(Debug, Clone)]
pub struct FontSet {
    pub prompt: Font,
    pub title: Font,
    pub code: Font,
    pub option: Font,
}

impl FontSet {
    /// Use one face for every role at the configured sizes
    pub fn from_face(face: FontFace, sizes: &FontSizes) -> Self {
        Self {
            prompt: Font::new(face.clone(), sizes.prompt),
            title: Font::new(face.clone(), sizes.title),
            code: Font::new(face.clone(), sizes.code),
            option: Font::new(face, sizes.option),
        }
    }

    /// Synthetic fonts for every role, used when no face is available
    pub fn synthetic(sizes: &FontSizes) -> Self {
        Self {
            prompt: Font::synthetic(sizes.prompt),
            title: Font::synthetic(sizes.title),
            code: Font::synthetic(sizes.code),
            option: Font::synthetic(sizes.option),
        }
    }

    /// The same font for every role
    pub fn uniform(font: Font) -> Self {
        Self {
            prompt: font.clone(),
            title: font.clone(),
            code: font.clone(),
            option: font,
        }
    }

    pub fn get(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Prompt => &self.prompt,
            FontRole::Title => &self.title,
            FontRole::Code => &self.code,
            FontRole::Option => &self.option,
        }
    }
}
