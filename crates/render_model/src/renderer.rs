//! Card painter
//!
//! Paints a layout plan in plan order: the background, the translucent
//! overlay, then each element's panel followed by its text lines.

use crate::{draw_text_line, Background, Palette, PanelPaint, RenderError, RenderedImage, Result};
use layout_engine::{LayoutPlan, LineTag, Rect as PlanRect, VisualElement};
use text_engine::{Font, FontRole, FontSet};
use tiny_skia::{PathBuilder, Pixmap, Rect, Stroke, Transform};

/// Paints plans with one font set and palette
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    fonts: &'a FontSet,
    palette: &'a Palette,
}

impl<'a> Renderer<'a> {
    pub fn new(fonts: &'a FontSet, palette: &'a Palette) -> Self {
        Self { fonts, palette }
    }

    /// Paint `plan` over `background`.
    ///
    /// Any failure discards the canvas; a partly painted image is never returned.
    pub fn paint(&self, plan: &LayoutPlan, background: &Background) -> Result<RenderedImage> {
        let canvas = plan.canvas();
        let mut pixmap = Pixmap::new(canvas.width, canvas.height).ok_or(RenderError::CanvasAllocation {
            width: canvas.width,
            height: canvas.height,
        })?;

        background.paint(&mut pixmap)?;
        fill_rect(
            &mut pixmap,
            PlanRect::new(0.0, 0.0, canvas.width as f32, canvas.height as f32),
            self.palette.overlay,
        )?;

        for element in plan.elements() {
            self.paint_element(&mut pixmap, element)?;
        }

        tracing::debug!(
            "Painted {} element(s) on a {}x{} canvas",
            plan.elements().len(),
            canvas.width,
            canvas.height
        );
        Ok(RenderedImage::new(pixmap))
    }

    fn paint_element(&self, pixmap: &mut Pixmap, element: &VisualElement) -> Result<()> {
        if let Some(style) = element.panel() {
            paint_panel(pixmap, element.bounds(), self.palette.panel(style))?;
        }
        for line in element.lines() {
            let color = self.palette.line_color(line.tag);
            draw_text_line(pixmap, self.font_for(line.tag), &line.text, line.x, line.y, color)?;
        }
        Ok(())
    }

    fn font_for(&self, tag: LineTag) -> &'a Font {
        let role = match tag {
            LineTag::Prompt => FontRole::Prompt,
            LineTag::Title => FontRole::Title,
            LineTag::Code(_) => FontRole::Code,
            LineTag::Option => FontRole::Option,
        };
        self.fonts.get(role)
    }
}

fn paint_panel(pixmap: &mut Pixmap, bounds: PlanRect, panel: &PanelPaint) -> Result<()> {
    let Some(rect) = to_skia_rect(bounds)? else {
        return Ok(());
    };
    fill_rect(pixmap, bounds, panel.fill)?;

    if panel.outline_width > 0.0 && panel.outline.a > 0 {
        // Keep the stroke inside the box
        let inset = panel.outline_width / 2.0;
        let inner = Rect::from_ltrb(
            rect.left() + inset,
            rect.top() + inset,
            rect.right() - inset,
            rect.bottom() - inset,
        )
        .unwrap_or(rect);
        let path = PathBuilder::from_rect(inner);
        let stroke = Stroke {
            width: panel.outline_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &panel.outline.paint(), &stroke, Transform::identity(), None);
    }
    Ok(())
}

fn fill_rect(pixmap: &mut Pixmap, bounds: PlanRect, color: crate::Color) -> Result<()> {
    if let Some(rect) = to_skia_rect(bounds)? {
        pixmap.fill_rect(rect, &color.paint(), Transform::identity(), None);
    }
    Ok(())
}

/// `None` for empty rectangles, an error for non-finite ones
fn to_skia_rect(bounds: PlanRect) -> Result<Option<Rect>> {
    let values = [bounds.x, bounds.y, bounds.width, bounds.height];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(RenderError::InvalidGeometry(format!("{:?}", bounds)));
    }
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return Ok(None);
    }
    Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height)
        .map(Some)
        .ok_or_else(|| RenderError::InvalidGeometry(format!("{:?}", bounds)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use layout_engine::{compute_layout, CanvasSize, LayoutConfig};
    use quiz_model::QuestionRecord;
    use text_engine::FontSizes;

    fn render(canvas: CanvasSize) -> Result<RenderedImage> {
        let fonts = FontSet::synthetic(&FontSizes::default());
        let palette = Palette::default();
        let plan = compute_layout(&QuestionRecord::sample(), &fonts, canvas, &LayoutConfig::default());
        Renderer::new(&fonts, &palette).paint(&plan, &Background::Flat(palette.fallback_background))
    }

    #[test]
    fn test_empty_canvas_is_an_error() {
        let result = render(CanvasSize::new(0, 0));
        assert!(matches!(
            result,
            Err(RenderError::CanvasAllocation { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_output_matches_canvas() {
        let image = render(CanvasSize::default()).unwrap();
        assert_eq!((image.width(), image.height()), (1080, 1920));
    }

    #[test]
    fn test_overlay_darkens_background() {
        let image = render(CanvasSize::default()).unwrap();
        // Bottom-left corner is outside every element
        let px = image.pixel(0, 1919).unwrap();
        let bg = Palette::default().fallback_background;
        assert_eq!(px.a, 255);
        assert!(px.b < bg.b);
        assert!(px.b > 0);
    }

    #[test]
    fn test_panels_use_panel_fill() {
        let fonts = FontSet::synthetic(&FontSizes::default());
        let palette = Palette::default();
        let plan = compute_layout(
            &QuestionRecord::sample(),
            &fonts,
            CanvasSize::default(),
            &LayoutConfig::default(),
        );
        let image = Renderer::new(&fonts, &palette)
            .paint(&plan, &Background::Flat(Color::BLACK))
            .unwrap();

        // A point inside the code box padding, clear of outline and text
        let code = plan.code_block().unwrap();
        let px = image
            .pixel(code.bounds.x as u32 + 8, code.bounds.y as u32 + 8)
            .unwrap();
        let overlay_only = image.pixel(0, 1919).unwrap();
        assert!(px.b > overlay_only.b);
    }

    #[test]
    fn test_non_finite_bounds_rejected() {
        let result = to_skia_rect(PlanRect::new(f32::NAN, 0.0, 1.0, 1.0));
        assert!(matches!(result, Err(RenderError::InvalidGeometry(_))));
        assert!(matches!(to_skia_rect(PlanRect::new(0.0, 0.0, 0.0, 5.0)), Ok(None)));
    }
}
