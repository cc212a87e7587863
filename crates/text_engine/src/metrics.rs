//! Text metrics calculations

use crate::Result;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Line height assumed when the backend cannot report one
pub const FALLBACK_LINE_HEIGHT: f32 = 20.0;

/// Pixel extent of a measured string
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

impl TextSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measures strings in pixels for one font.
///
/// Implementations must be deterministic for identical input, and appending
/// characters must never make a string narrower.
pub trait TextMetrics {
    /// Measure `text` with the font backend
    fn try_measure(&self, text: &str) -> Result<TextSize>;

    /// Line height known without measuring, used to size the fallback estimate
    fn nominal_height(&self) -> Option<f32> {
        None
    }

    /// Measure `text`, substituting a heuristic estimate if the backend fails.
    ///
    /// Layout never aborts because of a measurement failure.
    fn measure(&self, text: &str) -> TextSize {
        match self.try_measure(text) {
            Ok(size) => size,
            Err(e) => {
                let snippet: String = text.chars().take(20).collect();
                tracing::warn!(
                    "Failed to measure {:?}: {}. Using estimated size",
                    snippet,
                    e
                );
                estimate_text_size(text, self.nominal_height())
            }
        }
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn try_measure(&self, text: &str) -> Result<TextSize> {
        (**self).try_measure(text)
    }

    fn nominal_height(&self) -> Option<f32> {
        (**self).nominal_height()
    }
}

/// Heuristic size: each character is half a line height wide
pub fn estimate_text_size(text: &str, line_height: Option<f32>) -> TextSize {
    let height = line_height
        .filter(|h| h.is_finite() && *h > 0.0)
        .unwrap_or(FALLBACK_LINE_HEIGHT);
    TextSize::new(char_count(text) as f32 * (height / 2.0), height)
}

/// Number of user-perceived characters in `text`
pub fn char_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextError;

    struct BrokenBackend {
        size: Option<f32>,
    }

    impl TextMetrics for BrokenBackend {
        fn try_measure(&self, _text: &str) -> Result<TextSize> {
            Err(TextError::MeasurementFailed("backend offline".into()))
        }

        fn nominal_height(&self) -> Option<f32> {
            self.size
        }
    }

    #[test]
    fn test_fallback_uses_default_height() {
        let backend = BrokenBackend { size: None };
        let size = backend.measure("abcd");
        assert_eq!(size.height, FALLBACK_LINE_HEIGHT);
        assert_eq!(size.width, 4.0 * FALLBACK_LINE_HEIGHT / 2.0);
    }

    #[test]
    fn test_fallback_uses_observed_height() {
        let backend = BrokenBackend { size: Some(50.0) };
        let size = backend.measure("abc");
        assert_eq!(size, TextSize::new(75.0, 50.0));
    }

    #[test]
    fn test_fallback_ignores_bogus_height() {
        let backend = BrokenBackend { size: Some(f32::NAN) };
        assert_eq!(backend.measure("").height, FALLBACK_LINE_HEIGHT);
    }

    #[test]
    fn test_char_count_uses_graphemes() {
        assert_eq!(char_count("e\u{301}x"), 2);
        assert_eq!(char_count(""), 0);
    }
}
