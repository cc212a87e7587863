//! Card layout
//!
//! A single top-to-bottom pass with a cursor that only moves down:
//! 1. The fixed prompt, centred
//! 2. The question, wrapped to the content column
//! 3. The code snippet in a padded box, one classified line per source line
//! 4. One padded box per option, until a box would cross the bottom margin
//!
//! The same inputs always give the same plan.

use crate::{
    CanvasSize, CodeBlock, LayoutConfig, LayoutNotice, LayoutPlan, LineTag, OptionBox, PanelStyle,
    PlacedLine, RecordField, Rect, TextBlock, TextRole, VisualElement,
};
use quiz_model::QuestionRecord;
use text_engine::{wrap_text, FontSet, TextMetrics};

/// Lay out `record` on a canvas of `canvas` pixels
pub fn compute_layout(
    record: &QuestionRecord,
    fonts: &FontSet,
    canvas: CanvasSize,
    config: &LayoutConfig,
) -> LayoutPlan {
    let mut builder = PlanBuilder::new(fonts, canvas, config);
    builder.place_prompt();
    builder.place_question(record.question.as_deref());
    builder.place_code(record.code.as_deref());
    builder.place_options(&record.options);
    builder.finish()
}

/// Layout state for one pass
struct PlanBuilder<'a> {
    fonts: &'a FontSet,
    canvas: CanvasSize,
    config: &'a LayoutConfig,
    /// Top of the next element
    cursor: f32,
    elements: Vec<VisualElement>,
    notices: Vec<LayoutNotice>,
}

impl<'a> PlanBuilder<'a> {
    fn new(fonts: &'a FontSet, canvas: CanvasSize, config: &'a LayoutConfig) -> Self {
        Self {
            fonts,
            canvas,
            config,
            cursor: config.top_margin,
            elements: Vec::new(),
            notices: Vec::new(),
        }
    }

    fn canvas_width(&self) -> f32 {
        self.canvas.width as f32
    }

    fn content_width(&self) -> f32 {
        self.config.content_width(self.canvas_width())
    }

    fn place_prompt(&mut self) {
        let font = &self.fonts.prompt;
        let text = self.config.prompt_text.clone();
        let size = font.measure(&text);
        let x = ((self.canvas_width() - size.width) / 2.0).floor().max(0.0);
        let y = self.cursor;

        self.elements.push(VisualElement::TextBlock(TextBlock {
            role: TextRole::Prompt,
            bounds: Rect::new(x, y, size.width, size.height),
            lines: vec![PlacedLine {
                text,
                x,
                y,
                width: size.width,
                height: size.height,
                tag: LineTag::Prompt,
            }],
        }));
        self.cursor += size.height + self.config.block_spacing;
    }

    fn place_question(&mut self, question: Option<&str>) {
        let config = self.config;
        let question =
            self.field_or_placeholder(question, RecordField::Question, &config.placeholders.question);
        let font = &self.fonts.title;
        let x = self.config.padding_x;
        let lines = wrap_text(&question, font, self.content_width());
        let (lines, height) = stack_lines(
            &lines,
            font,
            x,
            self.cursor,
            self.config.title_line_spacing,
            |_| LineTag::Title,
        );

        self.elements.push(VisualElement::TextBlock(TextBlock {
            role: TextRole::Title,
            bounds: Rect::new(x, self.cursor, self.content_width(), height),
            lines,
        }));
        self.cursor += height + self.config.block_spacing;
    }

    fn place_code(&mut self, code: Option<&str>) {
        let config = self.config;
        let code = self.field_or_placeholder(code, RecordField::Code, &config.placeholders.code);
        let padding = config.code_box_padding;
        let rules = &config.lexical_rules;

        // Code is pre-formatted; lines are never re-wrapped
        let raw_lines: Vec<String> = code
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        let (lines, content_height) = stack_lines(
            &raw_lines,
            &self.fonts.code,
            self.config.padding_x,
            self.cursor + padding.y,
            self.config.code_line_spacing,
            |line| LineTag::Code(rules.classify(line)),
        );

        let bounds = Rect::new(
            self.config.padding_x - padding.x,
            self.cursor,
            self.content_width() + 2.0 * padding.x,
            content_height + 2.0 * padding.y,
        );
        self.elements.push(VisualElement::CodeBlock(CodeBlock {
            bounds,
            panel: PanelStyle::Code,
            lines,
        }));
        self.cursor = bounds.bottom() + self.config.block_spacing;
    }

    fn place_options(&mut self, options: &[String]) {
        let placeholder_options;
        let options = if options.is_empty() {
            tracing::warn!("Field 'options' missing, using placeholders");
            self.notices.push(LayoutNotice::MissingField {
                field: RecordField::Options,
            });
            placeholder_options =
                vec![self.config.placeholders.option.clone(); self.config.max_options];
            &placeholder_options[..]
        } else {
            if options.len() != quiz_model::OPTION_COUNT {
                tracing::warn!(
                    "Record has {} options, expected {}",
                    options.len(),
                    quiz_model::OPTION_COUNT
                );
            }
            options
        };

        let fonts = self.fonts;
        let font = &fonts.option;
        let padding = self.config.option_box_padding;
        let outset = self.config.option_box_outset;
        let wrap_width = self.config.option_wrap_width(self.canvas_width());
        let limit = self.canvas.height as f32 - self.config.bottom_margin;
        let count = options.len().min(self.config.max_options);

        for (index, option) in options.iter().take(count).enumerate() {
            let wrapped = wrap_text(option, font, wrap_width);
            let (lines, content_height) = stack_lines(
                &wrapped,
                font,
                self.config.padding_x + padding.x,
                self.cursor + padding.y,
                self.config.option_line_spacing,
                |_| LineTag::Option,
            );
            let box_height = content_height + 2.0 * padding.y;

            if self.cursor + box_height > limit {
                let dropped = count - index;
                tracing::warn!(
                    "Content overflow at option {}, dropping {} option(s)",
                    index + 1,
                    dropped
                );
                self.notices.push(LayoutNotice::ContentOverflow {
                    first_dropped: index,
                    dropped,
                });
                break;
            }

            let bounds = Rect::new(
                self.config.padding_x - outset,
                self.cursor,
                self.content_width() + 2.0 * outset,
                box_height,
            );
            self.elements.push(VisualElement::OptionBox(OptionBox {
                index,
                bounds,
                panel: PanelStyle::Option,
                lines,
            }));
            self.cursor = bounds.bottom() + self.config.option_spacing;
        }
    }

    /// The field text, or its placeholder when absent or blank
    fn field_or_placeholder(
        &mut self,
        value: Option<&str>,
        field: RecordField,
        placeholder: &str,
    ) -> String {
        match value {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                tracing::warn!("Field '{}' missing, using placeholder", field);
                self.notices.push(LayoutNotice::MissingField { field });
                placeholder.to_string()
            }
        }
    }

    fn finish(self) -> LayoutPlan {
        tracing::debug!(
            "Layout complete: {} element(s), cursor at {}",
            self.elements.len(),
            self.cursor
        );
        LayoutPlan::new(self.canvas, self.elements, self.notices)
    }
}

/// Stack `lines` downwards from `top`, returning the placed lines and their
/// total height. Spacing goes between lines only, never after the last.
fn stack_lines<M, F>(
    lines: &[String],
    font: &M,
    x: f32,
    top: f32,
    spacing: f32,
    tag: F,
) -> (Vec<PlacedLine>, f32)
where
    M: TextMetrics + ?Sized,
    F: Fn(&str) -> LineTag,
{
    if lines.is_empty() {
        return (Vec::new(), font.measure(" ").height);
    }

    let mut placed = Vec::with_capacity(lines.len());
    let mut y = top;
    for line in lines {
        let size = font.measure(line);
        // Blank lines take the height of a space
        let height = if line.is_empty() {
            font.measure(" ").height
        } else {
            size.height
        };
        placed.push(PlacedLine {
            text: line.clone(),
            x,
            y,
            width: size.width,
            height,
            tag: tag(line),
        });
        y += height + spacing;
    }

    (placed, y - spacing - top)
}
