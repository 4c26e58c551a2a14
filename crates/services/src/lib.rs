#![forbid(unsafe_code)]

pub mod error;
pub mod question_source;
pub mod quiz;

pub use error::{QuestionSourceError, QuizError};
pub use question_source::{BuiltinQuestions, JsonQuestionFile, QuestionSource, parse_questions_json};
pub use quiz::{AnswerResult, QuizController, QuizSession, ResultsView, SessionView};
