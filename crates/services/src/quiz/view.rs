//! Snapshots handed to the presentation layer.
//!
//! These are intentionally **not** UI view-models:
//! - no pre-formatted strings
//! - no styling decisions
//!
//! The UI derives labels and feedback colours from them.

/// Outcome of submitting a choice for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub choice_index: usize,
    pub correct: bool,
    pub correct_choice_index: usize,
}

/// Progress snapshot of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub current_index: usize,
    pub total: usize,
    pub score: usize,
    pub answered: bool,
    pub is_finished: bool,
}

impl SessionView {
    /// 1-based position of the current question, clamped to `total` once finished.
    #[must_use]
    pub fn question_number(&self) -> usize {
        (self.current_index + 1).min(self.total)
    }

    /// True when the current question is the final one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.is_finished && self.current_index + 1 == self.total
    }
}

/// Final tally, only available once every question was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
}

impl ResultsView {
    /// Whole-number percentage of correct answers, rounded down.
    #[must_use]
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.score * 100 / self.total
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}
