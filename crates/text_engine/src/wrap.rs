//! Greedy word wrapping
//!
//! Text is split into paragraphs on `\n`, each paragraph into words on single
//! spaces, and words are packed greedily into lines no wider than the wrap
//! width. A word that is wider than the wrap width on its own is cut into
//! segments using an average character width estimate.

use crate::TextMetrics;
use unicode_segmentation::UnicodeSegmentation;

/// Wrap `text` to `max_width`, returning every line in order.
///
/// Explicit line breaks are kept; an empty paragraph produces one empty line.
pub fn wrap_text<M: TextMetrics + ?Sized>(text: &str, metrics: &M, max_width: f32) -> Vec<String> {
    wrap_paragraphs(text, metrics, max_width)
        .into_iter()
        .flatten()
        .collect()
}

/// Wrap `text` to `max_width`, keeping the lines of each paragraph grouped.
///
/// The result always has one group per paragraph, i.e. one more group than
/// there are line breaks in `text`.
pub fn wrap_paragraphs<M: TextMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    max_width: f32,
) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|paragraph| {
            let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
            wrap_paragraph(paragraph, metrics, max_width)
        })
        .collect()
}

fn wrap_paragraph<M: TextMetrics + ?Sized>(
    paragraph: &str,
    metrics: &M,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    // Runs of spaces yield empty tokens; they only ever separate words
    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if metrics.measure(&candidate).width <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current = word.to_string();

        let word_width = metrics.measure(&current).width;
        if word_width > max_width {
            current = break_token(current, word_width, max_width, &mut lines);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut an unbreakable token into segments, pushing all but the last.
///
/// Segment length comes from the token's average character width, which is
/// exact for fixed-width fonts and approximate otherwise. Within a segment
/// window the cut prefers the last interior space; failing that it is a hard
/// cut. The returned remainder becomes the start of the next line.
fn break_token(mut token: String, token_width: f32, max_width: f32, lines: &mut Vec<String>) -> String {
    let length = token.graphemes(true).count().max(1);
    let average_width = token_width / length as f32;
    let chars_per_line = if average_width > 0.0 {
        // NaN and negative ratios saturate to 0
        ((max_width / average_width).floor() as usize).max(1)
    } else {
        1
    };

    tracing::debug!(
        "Breaking {}-character token into segments of {}",
        length,
        chars_per_line
    );

    while let Some((window_end, _)) = token.grapheme_indices(true).nth(chars_per_line) {
        let window = &token[..window_end];
        match window.rfind(' ') {
            Some(space) if space > 0 => {
                lines.push(token[..space].to_string());
                token = token[space..].trim().to_string();
            }
            _ => {
                lines.push(window.to_string());
                token = token[window_end..].to_string();
            }
        }
    }

    token
}
