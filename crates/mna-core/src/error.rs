use thiserror::Error;

use crate::models::question::QuestionId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("invalid fragment {value} for question {question}")]
    InvalidFragment { question: QuestionId, value: f64 },

    #[error("question {question} is derived from the protein-intake indicators")]
    DerivedFragment { question: QuestionId },

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("unknown protein-intake indicator: {0}")]
    UnknownIndicator(u8),

    #[error("unknown patient field: {0}")]
    UnknownField(String),
}
