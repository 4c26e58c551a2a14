use thiserror::Error;

use crate::model::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("a quiz needs at least one question")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Ordered, non-empty list of validated questions for one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        Ok(Self(questions))
    }

    /// Validate every draft, keeping document order.
    ///
    /// # Errors
    ///
    /// Returns the first invalid draft's error tagged with its position, or
    /// `QuestionSetError::Empty` if there are no drafts.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuestionSetError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| QuestionSetError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A set is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(QuestionSet::new(Vec::new()).unwrap_err(), QuestionSetError::Empty);
        assert_eq!(
            QuestionSet::from_drafts(Vec::new()).unwrap_err(),
            QuestionSetError::Empty
        );
    }

    #[test]
    fn drafts_keep_order() {
        let set = QuestionSet::from_drafts(vec![
            QuestionDraft::new("first", ["a", "b"], 0),
            QuestionDraft::new("second", ["a", "b"], 1),
        ])
        .unwrap();

        let texts: Vec<_> = set.iter().map(Question::text).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn invalid_draft_reports_position() {
        let err = QuestionSet::from_drafts(vec![
            QuestionDraft::new("ok", ["a", "b"], 0),
            QuestionDraft::new("bad", ["a", "b"], 7),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            QuestionSetError::Question {
                index: 1,
                source: QuestionError::CorrectChoiceOutOfRange { index: 7, len: 2 },
            }
        );
    }
}
