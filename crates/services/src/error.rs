//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{QuestionError, QuestionSetError};

/// Errors emitted by `QuizController`.
///
/// Every variant is a caller-contract violation; none of them is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question index {index} is out of range for {total} questions")]
    OutOfRange { index: usize, total: usize },
    #[error("choice {choice} is out of range for {len} choices")]
    InvalidChoice { choice: usize, len: usize },
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("quiz is not finished yet")]
    NotFinished,
    #[error("no questions available for quiz")]
    Empty,
    #[error("question {index} is invalid: {source}")]
    InvalidQuestionData {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted while loading questions from a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("failed to read question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionSetError),
}
