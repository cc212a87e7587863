//! Question record types

use crate::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of answer options a well-formed record carries
pub const OPTION_COUNT: usize = 4;

/// Letter identifying one of the four answer options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub const ALL: [AnswerLetter; OPTION_COUNT] =
        [AnswerLetter::A, AnswerLetter::B, AnswerLetter::C, AnswerLetter::D];

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }

    /// Zero-based position of this letter in the option list
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// The marker an option text is expected to start with, e.g. `"A) "`
    pub fn marker(self) -> String {
        format!("{}) ", self.as_char())
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for AnswerLetter {
    type Err = QuizError;

    /// Parses a letter, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(QuizError::InvalidAnswerLetter(s.to_string())),
        }
    }
}

impl TryFrom<String> for AnswerLetter {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AnswerLetter> for String {
    fn from(letter: AnswerLetter) -> Self {
        letter.to_string()
    }
}

/// A quiz question as delivered by the content source.
///
/// `question` and `code` may be absent; the layout substitutes placeholders
/// for them. `options` is expected to hold exactly [`OPTION_COUNT`] entries,
/// each starting with its letter marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// The question text
    #[serde(default)]
    pub question: Option<String>,
    /// Code snippet, lines joined by `\n`
    #[serde(default)]
    pub code: Option<String>,
    /// Answer options in display order
    #[serde(default)]
    pub options: Vec<String>,
    /// Letter of the correct option
    pub correct_answer: AnswerLetter,
}

impl QuestionRecord {
    /// Create a record with every field present
    pub fn new(
        question: impl Into<String>,
        code: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_answer: AnswerLetter,
    ) -> Self {
        Self {
            question: Some(question.into()),
            code: Some(code.into()),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        }
    }

    /// Parse and validate a record from the content source's JSON shape
    pub fn from_json(json: &str) -> Result<Self> {
        let record: QuestionRecord = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// Check the structural invariants the content source must uphold
    pub fn validate(&self) -> Result<()> {
        if self.options.len() != OPTION_COUNT {
            return Err(QuizError::InvalidRecord(format!(
                "expected {} options, found {}",
                OPTION_COUNT,
                self.options.len()
            )));
        }

        for (option, letter) in self.options.iter().zip(AnswerLetter::ALL) {
            let trimmed = option.trim_start();
            let mut chars = trimmed.chars();
            let starts_with_marker = chars
                .next()
                .is_some_and(|c| c.eq_ignore_ascii_case(&letter.as_char()))
                && chars.next() == Some(')');
            if !starts_with_marker {
                return Err(QuizError::InvalidRecord(format!(
                    "option {:?} does not start with {:?}",
                    option,
                    letter.marker().trim_end()
                )));
            }
        }

        Ok(())
    }

    /// The built-in record used when no content source is available
    pub fn sample() -> Self {
        Self::new(
            "What data structure results from this Python code?",
            "data = {i: i*i for i in range(5)}\nprint(type(data))",
            [
                "A) List",
                "B) Tuple",
                "C) Set of key-value pairs representing squares (Dictionary)",
                "D) Array",
            ],
            AnswerLetter::C,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_parsing_is_lenient() {
        assert_eq!(" c ".parse::<AnswerLetter>().unwrap(), AnswerLetter::C);
        assert_eq!("a".parse::<AnswerLetter>().unwrap(), AnswerLetter::A);
        assert!("E".parse::<AnswerLetter>().is_err());
        assert!("AB".parse::<AnswerLetter>().is_err());
    }

    #[test]
    fn test_letter_index_and_marker() {
        assert_eq!(AnswerLetter::D.index(), 3);
        assert_eq!(AnswerLetter::B.marker(), "B) ");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "question": "What is the output?",
            "code": "x = [1, 2]\nprint(len(x))",
            "options": ["A) 1", "B) 2", "C) 3", "D) Error"],
            "correct_answer": "b"
        }"#;
        let record = QuestionRecord::from_json(json).unwrap();
        assert_eq!(record.correct_answer, AnswerLetter::B);
        assert_eq!(record.code.as_deref(), Some("x = [1, 2]\nprint(len(x))"));
    }

    #[test]
    fn test_from_json_missing_code_is_allowed() {
        let json = r#"{
            "question": "Q?",
            "options": ["A) 1", "B) 2", "C) 3", "D) 4"],
            "correct_answer": "A"
        }"#;
        let record = QuestionRecord::from_json(json).unwrap();
        assert!(record.code.is_none());
    }

    #[test]
    fn test_from_json_rejects_wrong_option_count() {
        let json = r#"{"question": "Q?", "code": "", "options": ["A) 1"], "correct_answer": "A"}"#;
        assert!(matches!(
            QuestionRecord::from_json(json),
            Err(QuizError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_marker() {
        let record = QuestionRecord::new("Q", "", ["A) 1", "2", "C) 3", "D) 4"], AnswerLetter::A);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(QuestionRecord::sample().validate().is_ok());
    }

    #[test]
    fn test_serialize_letter_as_string() {
        let json = serde_json::to_string(&QuestionRecord::sample()).unwrap();
        assert!(json.contains("\"correct_answer\":\"C\""));
    }
}
