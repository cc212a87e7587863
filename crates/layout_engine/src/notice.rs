//! Non-fatal layout conditions
//!
//! Layout always produces a plan. Problems it works around are recorded here
//! and logged rather than returned as errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A record field that can be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordField {
    Question,
    Code,
    Options,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Code => write!(f, "code"),
            Self::Options => write!(f, "options"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutNotice {
    /// A field was absent or blank and its placeholder was laid out instead
    MissingField { field: RecordField },
    /// Trailing options did not fit above the bottom margin and were left out
    ContentOverflow { first_dropped: usize, dropped: usize },
}

impl fmt::Display for LayoutNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "field '{}' missing, placeholder used", field),
            Self::ContentOverflow {
                first_dropped,
                dropped,
            } => write!(
                f,
                "content overflow at option {}, {} option(s) dropped",
                first_dropped + 1,
                dropped
            ),
        }
    }
}
