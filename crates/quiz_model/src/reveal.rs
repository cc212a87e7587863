//! Answer reveal metadata for the video compositor
//!
//! The finished card is shown for the whole clip; the answer text is overlaid
//! only during a trailing window. This module finds the text to overlay and
//! describes that window. Drawing the overlay belongs to the video stage.

use crate::{AnswerLetter, QuestionRecord};
use serde::{Deserialize, Serialize};

/// Characters accepted between an option's letter and its text
const OPTION_SEPARATORS: [char; 4] = [')', '.', ':', ']'];

/// Find the full text of the option labelled `letter`.
///
/// An option matches when its trimmed text begins with the letter (any case)
/// followed by whitespace or one of `) . : ]`. The first match wins. When
/// nothing matches, `"(<letter>)"` is returned.
pub fn correct_option_text(options: &[String], letter: AnswerLetter) -> String {
    options
        .iter()
        .map(|option| option.trim())
        .find(|option| starts_with_letter(option, letter))
        .map(str::to_string)
        .unwrap_or_else(|| format!("({})", letter))
}

fn starts_with_letter(option: &str, letter: AnswerLetter) -> bool {
    let mut chars = option.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.eq_ignore_ascii_case(&letter.as_char()) {
        return false;
    }
    chars
        .next()
        .is_some_and(|sep| sep.is_whitespace() || OPTION_SEPARATORS.contains(&sep))
}

/// The correct answer of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerReveal {
    pub letter: AnswerLetter,
    /// Full option text, or `"(<letter>)"` if no option carries the letter
    pub option_text: String,
}

impl AnswerReveal {
    pub fn from_record(record: &QuestionRecord) -> Self {
        let option_text = correct_option_text(&record.options, record.correct_answer);
        if option_text.starts_with('(') {
            tracing::warn!(
                "No option labelled {} found, using placeholder answer text",
                record.correct_answer
            );
        }
        Self {
            letter: record.correct_answer,
            option_text,
        }
    }

    /// Text shown by the overlay
    pub fn display_text(&self) -> String {
        format!("Answer: {}", self.option_text)
    }
}

/// Clip timing used to place the reveal window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// Total clip length in seconds
    pub duration_secs: f32,
    /// When the answer appears, in seconds from the start
    pub reveal_start_secs: f32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_secs: 15.0,
            reveal_start_secs: 12.0,
        }
    }
}

impl RevealTiming {
    /// Length of the trailing reveal window, never negative
    pub fn reveal_duration_secs(&self) -> f32 {
        (self.duration_secs - self.reveal_start_secs).max(0.0)
    }
}

/// Everything the video stage needs to overlay the answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealOverlay {
    pub answer: AnswerReveal,
    pub text: String,
    pub clip_duration_secs: f32,
    pub start_secs: f32,
    pub duration_secs: f32,
}

impl RevealOverlay {
    pub fn new(answer: AnswerReveal, timing: &RevealTiming) -> Self {
        Self {
            text: answer.display_text(),
            answer,
            clip_duration_secs: timing.duration_secs,
            start_secs: timing.reveal_start_secs,
            duration_secs: timing.reveal_duration_secs(),
        }
    }
}
