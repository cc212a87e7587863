//! Text rasterization
//!
//! Outline fonts are shaped with the same settings used for measuring, so
//! painted text matches the widths the layout saw. Glyph outlines are built
//! in font units (y-up) and mapped to the canvas with a flipping transform.
//! Fixed-advance fonts have no outlines and paint one block per character.

use crate::{Color, RenderError, Result};
use text_engine::ttf_parser::{self, GlyphId};
use text_engine::{shape_text, FixedAdvance, Font, FontFace, FontSource};
use tiny_skia::{FillRule, Path, PathBuilder, Pixmap, Rect, Transform};
use unicode_segmentation::UnicodeSegmentation;

/// Collects a glyph outline into a tiny-skia path
struct OutlineSink {
    builder: PathBuilder,
}

impl OutlineSink {
    fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }

    fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

/// Paint one line of `text` with its top-left corner at (`x`, `top`)
pub fn draw_text_line(
    pixmap: &mut Pixmap,
    font: &Font,
    text: &str,
    x: f32,
    top: f32,
    color: Color,
) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match &font.source {
        FontSource::Outline(face) => draw_outlined(pixmap, face, font.size_px, text, x, top, color),
        FontSource::Fixed(fixed) => {
            draw_blocks(pixmap, fixed, text, x, top, color);
            Ok(())
        }
    }
}

fn draw_outlined(
    pixmap: &mut Pixmap,
    face: &FontFace,
    size_px: f32,
    text: &str,
    x: f32,
    top: f32,
    color: Color,
) -> Result<()> {
    let run = shape_text(face, text, size_px)
        .map_err(|e| RenderError::FontUnavailable(e.to_string()))?;
    let parsed = face
        .parse()
        .map_err(|e| RenderError::FontUnavailable(e.to_string()))?;

    let paint = color.paint();
    let baseline = top + run.ascender;
    for glyph in &run.glyphs {
        let mut sink = OutlineSink::new();
        // Spaces and other blank glyphs have no outline
        if parsed.outline_glyph(GlyphId(glyph.glyph_id), &mut sink).is_none() {
            continue;
        }
        let Some(path) = sink.finish() else {
            continue;
        };
        let transform = Transform::from_row(
            run.scale,
            0.0,
            0.0,
            -run.scale,
            x + glyph.x + glyph.x_offset,
            baseline - glyph.y_offset,
        );
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    }
    Ok(())
}

/// One filled block per visible character, inset inside its advance cell
fn draw_blocks(pixmap: &mut Pixmap, fixed: &FixedAdvance, text: &str, x: f32, top: f32, color: Color) {
    let paint = color.paint();
    let inset_x = fixed.advance * 0.1;
    let inset_y = fixed.line_height * 0.2;

    for (i, grapheme) in text.graphemes(true).enumerate() {
        if grapheme.trim().is_empty() {
            continue;
        }
        let left = x + i as f32 * fixed.advance + inset_x;
        let Some(rect) = Rect::from_xywh(
            left,
            top + inset_y,
            fixed.advance - 2.0 * inset_x,
            fixed.line_height - 2.0 * inset_y,
        ) else {
            continue;
        };
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}
