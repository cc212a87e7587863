//! Glyph positioning using rustybuzz
//!
//! Text is positioned left-to-right with kerning and ligatures turned off, so
//! a line's width is the plain sum of its glyph advances. This keeps widths
//! monotonic as characters are appended, which the wrapper relies on.

use crate::{FontFace, Result};
use rustybuzz::ttf_parser::Tag;
use rustybuzz::{Direction, Feature, UnicodeBuffer};

/// A positioned glyph, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// Pen position of this glyph relative to the run start
    pub x: f32,
    /// Horizontal advance
    pub x_advance: f32,
    /// Horizontal offset from the pen position
    pub x_offset: f32,
    /// Vertical offset from the baseline (y-up)
    pub y_offset: f32,
}

/// A run of shaped glyphs with line metrics, in pixels
#[derive(Debug, Clone)]
pub struct ShapedRun {
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance width
    pub width: f32,
    /// Font size used for shaping
    pub font_size: f32,
    /// Pixels per font unit
    pub scale: f32,
    /// Ascender height
    pub ascender: f32,
    /// Descender depth (positive value)
    pub descender: f32,
}

impl ShapedRun {
    /// Height of a line set in this run's font
    pub fn line_height(&self) -> f32 {
        self.ascender + self.descender
    }
}

/// Shape `text` with `face` at `font_size` pixels
pub fn shape_text(face: &FontFace, text: &str, font_size: f32) -> Result<ShapedRun> {
    let face = face.parse()?;
    let scale = font_size / face.units_per_em() as f32;

    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    buffer.set_direction(Direction::LeftToRight);
    buffer.guess_segment_properties();

    let features = [
        Feature::new(Tag::from_bytes(b"kern"), 0, ..),
        Feature::new(Tag::from_bytes(b"liga"), 0, ..),
        Feature::new(Tag::from_bytes(b"clig"), 0, ..),
    ];
    let output = rustybuzz::shape(&face, &features, buffer);

    let mut glyphs = Vec::with_capacity(output.len());
    let mut pen = 0.0f32;
    for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
        // Negative advances would let appended text shrink a line
        let x_advance = (pos.x_advance as f32 * scale).max(0.0);
        glyphs.push(ShapedGlyph {
            glyph_id: info.glyph_id as u16,
            x: pen,
            x_advance,
            x_offset: pos.x_offset as f32 * scale,
            y_offset: pos.y_offset as f32 * scale,
        });
        pen += x_advance;
    }

    Ok(ShapedRun {
        glyphs,
        width: pen,
        font_size,
        scale,
        ascender: face.ascender() as f32 * scale,
        descender: (face.descender() as f32 * scale).abs(),
    })
}
