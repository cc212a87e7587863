//! Error types for quiz model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Invalid answer letter: {0:?}")]
    InvalidAnswerLetter(String),

    #[error("Invalid question record: {0}")]
    InvalidRecord(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
