/// Mutable progress of one run through the questions.
///
/// Only `QuizController` mutates a session. Invariants:
/// `current_index <= total` and `score <= current_index + answered`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    pub(crate) current_index: usize,
    pub(crate) score: usize,
    pub(crate) answered: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }
}
