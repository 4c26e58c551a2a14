use serde::Deserialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least 2 choices, got {len}")]
    TooFewChoices { len: usize },

    #[error("choice {index} is empty")]
    EmptyChoice { index: usize },

    #[error("correct choice index {index} is out of range for {len} choices")]
    CorrectChoiceOutOfRange { index: usize, len: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a question document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub text: String,
    pub choices: Vec<String>,
    #[serde(rename = "correctAnswerIndex")]
    pub correct_choice: usize,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        correct_choice: usize,
    ) -> Self {
        Self {
            text: text.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_choice,
        }
    }

    /// Check the draft and turn it into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text or a choice is blank, when there are fewer
    /// than two choices, or when the correct index does not name a choice.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let len = self.choices.len();
        if len < Question::MIN_CHOICES {
            return Err(QuestionError::TooFewChoices { len });
        }

        if let Some(index) = self.choices.iter().position(|c| c.trim().is_empty()) {
            return Err(QuestionError::EmptyChoice { index });
        }

        if self.correct_choice >= len {
            return Err(QuestionError::CorrectChoiceOutOfRange {
                index: self.correct_choice,
                len,
            });
        }

        Ok(Question {
            text: self.text,
            choices: self.choices,
            correct_choice: self.correct_choice,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// `correct_choice` always indexes an entry of `choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    correct_choice: usize,
}

impl Question {
    pub const MIN_CHOICES: usize = 2;

    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new(
        text: impl Into<String>,
        choices: impl IntoIterator<Item = impl Into<String>>,
        correct_choice: usize,
    ) -> Result<Self, QuestionError> {
        QuestionDraft::new(text, choices, correct_choice).validate()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn correct_choice(&self) -> usize {
        self.correct_choice
    }

    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_choice
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        QuestionDraft::deserialize(deserializer)?
            .validate()
            .map_err(serde::de::Error::custom)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
