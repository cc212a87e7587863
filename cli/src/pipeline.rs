//! Card composition pipeline
//!
//! Layout never fails; painting can. The pipeline stops at the first fatal
//! result so a failed card never reaches the video stage.

use crate::Settings;
use layout_engine::{compute_layout, LayoutNotice, LayoutPlan};
use quiz_model::{AnswerReveal, QuestionRecord, RevealOverlay};
use render_model::{Background, RenderedImage, Renderer};
use text_engine::FontSet;

/// A painted card and what the video stage needs alongside it
#[derive(Debug)]
pub struct ComposedCard {
    pub image: RenderedImage,
    pub plan: LayoutPlan,
    pub reveal: RevealOverlay,
}

impl ComposedCard {
    pub fn notices(&self) -> &[LayoutNotice] {
        self.plan.notices()
    }
}

/// Lay out and paint `record`
pub fn compose_card(
    record: &QuestionRecord,
    fonts: &FontSet,
    background: &Background,
    settings: &Settings,
) -> render_model::Result<ComposedCard> {
    let plan = compute_layout(record, fonts, settings.canvas, &settings.layout);
    for notice in plan.notices() {
        tracing::info!("Layout notice: {}", notice);
    }

    let image = Renderer::new(fonts, &settings.palette).paint(&plan, background)?;
    let reveal = RevealOverlay::new(AnswerReveal::from_record(record), &settings.timing);

    Ok(ComposedCard { image, plan, reveal })
}

/// Fonts for every role: the first face the probe finds, else synthetic metrics
pub fn resolve_fonts(settings: &Settings) -> FontSet {
    match settings.fonts.probe().resolve() {
        Some(face) => FontSet::from_face(face, &settings.fonts.sizes),
        None => {
            tracing::warn!("No usable font found, text will be drawn as blocks");
            FontSet::synthetic(&settings.fonts.sizes)
        }
    }
}

/// The configured background image, or the palette's flat color
pub fn resolve_background(settings: &Settings) -> Background {
    Background::load_or(&settings.background, settings.palette.fallback_background)
}
