//! Line classification for code coloring
//!
//! Each code line gets exactly one class. Checks run in a fixed order:
//! comment, then keyword, then string, else default. A commented-out line
//! that contains a keyword is therefore still a comment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Display category of one code line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineClass {
    #[default]
    Default,
    Keyword,
    String,
    Comment,
}

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "else", "elif", "for", "while", "try", "except", "finally", "return",
    "import", "from", "with", "yield", "pass", "break", "continue", "in", "is", "not", "and", "or",
    "lambda", "async", "await", "global", "nonlocal", "assert", "del",
];

const COMMENT_MARKERS: &[&str] = &["#"];

const QUOTE_MARKERS: &[&str] = &["'''", "\"\"\"", "f'", "f\"", "'", "\""];

/// The marker and keyword sets used by [`LexicalRules::classify`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalRules {
    /// A line whose trimmed text starts with one of these is a comment
    pub comment_markers: Vec<String>,
    /// Keywords recognised as the first word of a line
    pub keywords: BTreeSet<String>,
    /// A line containing any of these is a string line
    pub quote_markers: Vec<String>,
}

impl Default for LexicalRules {
    fn default() -> Self {
        Self {
            comment_markers: COMMENT_MARKERS.iter().map(|m| m.to_string()).collect(),
            keywords: PYTHON_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            quote_markers: QUOTE_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl LexicalRules {
    /// Classify one line of code
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();
        if self
            .comment_markers
            .iter()
            .any(|marker| !marker.is_empty() && trimmed.starts_with(marker.as_str()))
        {
            return LineClass::Comment;
        }

        if self.keywords.contains(leading_word(trimmed)) {
            return LineClass::Keyword;
        }

        if self
            .quote_markers
            .iter()
            .any(|marker| !marker.is_empty() && line.contains(marker.as_str()))
        {
            return LineClass::String;
        }

        LineClass::Default
    }
}

/// The identifier at the start of `text`; a keyword only counts when it is
/// not immediately followed by another word character
fn leading_word(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}

/// Classify a line with the default Python rules
pub fn classify(line: &str) -> LineClass {
    static RULES: OnceLock<LexicalRules> = OnceLock::new();
    RULES.get_or_init(LexicalRules::default).classify(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(classify("# if x:"), LineClass::Comment);
        assert_eq!(classify("if x > 0:"), LineClass::Keyword);
        assert_eq!(classify("print('hi')"), LineClass::String);
        assert_eq!(classify("x = 1"), LineClass::Default);
    }

    #[test]
    fn test_comment_beats_string() {
        assert_eq!(classify("    # print(\"x\")"), LineClass::Comment);
    }

    #[test]
    fn test_keyword_beats_string() {
        assert_eq!(classify("    return 'done'"), LineClass::Keyword);
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        assert_eq!(classify("iffy = 3"), LineClass::Default);
        assert_eq!(classify("if_ok = True"), LineClass::Default);
        assert_eq!(classify("int(x)"), LineClass::Default);
        assert_eq!(classify("if(x): pass"), LineClass::Keyword);
        assert_eq!(classify("  for i in range(3):"), LineClass::Keyword);
    }

    #[test]
    fn test_keyword_must_lead_the_line() {
        assert_eq!(classify("x = a if b else c"), LineClass::Default);
    }

    #[test]
    fn test_quotes() {
        assert_eq!(classify("s = \"\"\"doc\"\"\""), LineClass::String);
        assert_eq!(classify("name = f\"{x}\""), LineClass::String);
        assert_eq!(classify("x = 1  # trailing 'note'"), LineClass::String);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(classify(""), LineClass::Default);
        assert_eq!(classify("   "), LineClass::Default);
    }

    #[test]
    fn test_custom_rules() {
        let rules = LexicalRules {
            comment_markers: vec!["//".into()],
            keywords: ["fn", "let"].iter().map(|k| k.to_string()).collect(),
            quote_markers: vec!["\"".into()],
        };
        assert_eq!(rules.classify("// fn main"), LineClass::Comment);
        assert_eq!(rules.classify("let x = 1;"), LineClass::Keyword);
        assert_eq!(rules.classify("# not a comment"), LineClass::Default);
        assert_eq!(rules.classify("println!(\"x\");"), LineClass::String);
    }
}
