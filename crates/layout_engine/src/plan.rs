//! Layout plan structure

use crate::{LayoutNotice, LineClass};
use serde::{Deserialize, Serialize};

/// A rectangle in canvas pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Fixed canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const PORTRAIT_HD: CanvasSize = CanvasSize::new(1080, 1920);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::PORTRAIT_HD
    }
}

/// Color tag of a laid-out line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "class")]
pub enum LineTag {
    Prompt,
    Title,
    Code(LineClass),
    Option,
}

/// One line of text at its absolute top-left position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub tag: LineTag,
}

/// What a plain text block holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    Prompt,
    Title,
}

/// Background and outline style of a boxed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelStyle {
    Code,
    Option,
}

/// Unboxed lines: the prompt or the wrapped question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub role: TextRole,
    pub bounds: Rect,
    pub lines: Vec<PlacedLine>,
}

/// The boxed code snippet with one classified line per source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub bounds: Rect,
    pub panel: PanelStyle,
    pub lines: Vec<PlacedLine>,
}

/// One boxed answer option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionBox {
    /// Position of the option in the record
    pub index: usize,
    pub bounds: Rect,
    pub panel: PanelStyle,
    pub lines: Vec<PlacedLine>,
}

/// A positioned unit of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VisualElement {
    TextBlock(TextBlock),
    CodeBlock(CodeBlock),
    OptionBox(OptionBox),
}

impl VisualElement {
    pub fn bounds(&self) -> Rect {
        match self {
            Self::TextBlock(block) => block.bounds,
            Self::CodeBlock(block) => block.bounds,
            Self::OptionBox(option) => option.bounds,
        }
    }

    pub fn lines(&self) -> &[PlacedLine] {
        match self {
            Self::TextBlock(block) => &block.lines,
            Self::CodeBlock(block) => &block.lines,
            Self::OptionBox(option) => &option.lines,
        }
    }

    /// The box style, for elements drawn inside a panel
    pub fn panel(&self) -> Option<PanelStyle> {
        match self {
            Self::TextBlock(_) => None,
            Self::CodeBlock(block) => Some(block.panel),
            Self::OptionBox(option) => Some(option.panel),
        }
    }
}

/// Elements of a card in top-to-bottom order.
///
/// Built by [`compute_layout`](crate::compute_layout) and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    canvas: CanvasSize,
    elements: Vec<VisualElement>,
    notices: Vec<LayoutNotice>,
}

impl LayoutPlan {
    pub(crate) fn new(canvas: CanvasSize, elements: Vec<VisualElement>, notices: Vec<LayoutNotice>) -> Self {
        Self {
            canvas,
            elements,
            notices,
        }
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    /// Non-fatal conditions absorbed while laying out
    pub fn notices(&self) -> &[LayoutNotice] {
        &self.notices
    }

    pub fn option_boxes(&self) -> impl Iterator<Item = &OptionBox> {
        self.elements.iter().filter_map(|element| match element {
            VisualElement::OptionBox(option) => Some(option),
            _ => None,
        })
    }

    pub fn code_block(&self) -> Option<&CodeBlock> {
        self.elements.iter().find_map(|element| match element {
            VisualElement::CodeBlock(block) => Some(block),
            _ => None,
        })
    }

    /// Number of options left out because they did not fit
    pub fn dropped_options(&self) -> usize {
        self.notices
            .iter()
            .map(|notice| match notice {
                LayoutNotice::ContentOverflow { dropped, .. } => *dropped,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(40.0, 20.0));
    }

    #[test]
    fn test_element_accessors() {
        let option = VisualElement::OptionBox(OptionBox {
            index: 2,
            bounds: Rect::new(0.0, 0.0, 100.0, 50.0),
            panel: PanelStyle::Option,
            lines: Vec::new(),
        });
        assert_eq!(option.panel(), Some(PanelStyle::Option));
        assert_eq!(option.bounds().height, 50.0);
        assert!(option.lines().is_empty());
    }

    #[test]
    fn test_dropped_options_counts_overflow() {
        let plan = LayoutPlan::new(
            CanvasSize::default(),
            Vec::new(),
            vec![LayoutNotice::ContentOverflow {
                first_dropped: 1,
                dropped: 3,
            }],
        );
        assert_eq!(plan.dropped_options(), 3);
        assert_eq!(plan.option_boxes().count(), 0);
    }
}
