//! Layout configuration

use crate::LexicalRules;
use serde::{Deserialize, Serialize};

/// Horizontal and vertical padding inside a box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub x: f32,
    pub y: f32,
}

impl Insets {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Text substituted for absent record fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub question: String,
    pub code: String,
    pub option: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            question: "Error: Question missing".to_string(),
            code: "# Error: Code missing".to_string(),
            option: "Error: Options missing".to_string(),
        }
    }
}

/// Spacing, padding, and fixed text used by [`compute_layout`](crate::compute_layout).
/// All values are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left/right padding of the content column
    pub padding_x: f32,
    /// Where the prompt starts
    pub top_margin: f32,
    /// Space kept free at the bottom of the canvas
    pub bottom_margin: f32,
    /// Space between the prompt, question, code block, and first option
    pub block_spacing: f32,
    /// Space between wrapped question lines
    pub title_line_spacing: f32,
    /// Space between code lines
    pub code_line_spacing: f32,
    /// Space between wrapped lines inside an option box
    pub option_line_spacing: f32,
    /// Padding inside the code box; the box also extends this far past the column
    pub code_box_padding: Insets,
    /// Padding inside each option box
    pub option_box_padding: Insets,
    /// How far option boxes extend past the content column on each side
    pub option_box_outset: f32,
    /// Space between option boxes
    pub option_spacing: f32,
    /// Most options laid out
    pub max_options: usize,
    /// Static text at the top of the card
    pub prompt_text: String,
    pub placeholders: Placeholders,
    pub lexical_rules: LexicalRules,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_x: 60.0,
            top_margin: 60.0,
            bottom_margin: 50.0,
            block_spacing: 40.0,
            title_line_spacing: 15.0,
            code_line_spacing: 10.0,
            option_line_spacing: 10.0,
            code_box_padding: Insets::new(20.0, 20.0),
            option_box_padding: Insets::new(15.0, 15.0),
            option_box_outset: 10.0,
            option_spacing: 25.0,
            max_options: quiz_model::OPTION_COUNT,
            prompt_text: "Tap to pause! Answer in comments!".to_string(),
            placeholders: Placeholders::default(),
            lexical_rules: LexicalRules::default(),
        }
    }
}

impl LayoutConfig {
    /// Width of the content column on a canvas `canvas_width` pixels wide
    pub fn content_width(&self, canvas_width: f32) -> f32 {
        (canvas_width - 2.0 * self.padding_x).max(0.0)
    }

    /// Wrap width for option text
    pub fn option_wrap_width(&self, canvas_width: f32) -> f32 {
        (self.content_width(canvas_width) - 2.0 * self.option_box_padding.x).max(0.0)
    }
}
