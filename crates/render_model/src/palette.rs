//! Card colors

use crate::Color;
use layout_engine::{LineClass, LineTag, PanelStyle};
use serde::{Deserialize, Serialize};

/// Fill and outline of a boxed element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelPaint {
    pub fill: Color,
    pub outline: Color,
    /// Outline width in pixels; zero disables the outline
    pub outline_width: f32,
}

/// Every color the renderer uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Prompt and question text
    pub text: Color,
    pub code_default: Color,
    pub code_keyword: Color,
    pub code_string: Color,
    pub code_comment: Color,
    pub option_text: Color,
    pub code_panel: PanelPaint,
    pub option_panel: PanelPaint,
    /// Translucent layer over the whole background
    pub overlay: Color,
    /// Background when no image is available
    pub fallback_background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::WHITE,
            code_default: Color::rgb(100, 200, 255),
            code_keyword: Color::rgb(255, 150, 0),
            code_string: Color::rgb(0, 255, 150),
            code_comment: Color::rgb(150, 150, 150),
            option_text: Color::YELLOW,
            code_panel: PanelPaint {
                fill: Color::rgba(30, 30, 50, 230),
                outline: Color::rgb(100, 200, 255),
                outline_width: 2.0,
            },
            option_panel: PanelPaint {
                fill: Color::rgba(50, 50, 70, 200),
                outline: Color::rgba(200, 200, 200, 128),
                outline_width: 1.0,
            },
            overlay: Color::rgba(0, 0, 0, 180),
            fallback_background: Color::rgb(20, 20, 40),
        }
    }
}

impl Palette {
    pub fn line_color(&self, tag: LineTag) -> Color {
        match tag {
            LineTag::Prompt | LineTag::Title => self.text,
            LineTag::Code(LineClass::Default) => self.code_default,
            LineTag::Code(LineClass::Keyword) => self.code_keyword,
            LineTag::Code(LineClass::String) => self.code_string,
            LineTag::Code(LineClass::Comment) => self.code_comment,
            LineTag::Option => self.option_text,
        }
    }

    pub fn panel(&self, style: PanelStyle) -> &PanelPaint {
        match style {
            PanelStyle::Code => &self.code_panel,
            PanelStyle::Option => &self.option_panel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_classes_have_distinct_colors() {
        let palette = Palette::default();
        let colors = [
            palette.line_color(LineTag::Code(LineClass::Default)),
            palette.line_color(LineTag::Code(LineClass::Keyword)),
            palette.line_color(LineTag::Code(LineClass::String)),
            palette.line_color(LineTag::Code(LineClass::Comment)),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_prompt_and_title_share_text_color() {
        let palette = Palette::default();
        assert_eq!(palette.line_color(LineTag::Prompt), palette.line_color(LineTag::Title));
        assert_eq!(palette.line_color(LineTag::Option), Color::YELLOW);
    }

    #[test]
    fn test_partial_palette_json() {
        let palette: Palette =
            serde_json::from_str(r#"{"option_text": {"r": 0, "g": 255, "b": 0}}"#).unwrap();
        assert_eq!(palette.option_text, Color::rgb(0, 255, 0));
        assert_eq!(palette.overlay, Color::rgba(0, 0, 0, 180));
    }
}
