use std::fmt;

use quiz_core::model::{Question, QuestionDraft, QuestionSet, QuestionSetError};

use super::session::QuizSession;
use super::view::{AnswerResult, ResultsView, SessionView};
use crate::error::QuizError;

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Steps through a fixed question set, scoring one answer per question.
///
/// The controller is the only mutator of its `QuizSession`. Callers read progress through
/// `SessionView`/`ResultsView` snapshots and drive it with `submit_answer`, `advance`
/// and `restart`.
pub struct QuizController {
    questions: QuestionSet,
    session: QuizSession,
}

impl QuizController {
    /// Create a controller over `questions`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let questions = QuestionSet::new(questions).map_err(|_| QuizError::Empty)?;
        Ok(Self::from_set(questions))
    }

    /// Create a controller from unvalidated drafts, re-checking every question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestionData` for the first malformed draft and
    /// `QuizError::Empty` if there are none.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, QuizError> {
        match QuestionSet::from_drafts(drafts) {
            Ok(questions) => Ok(Self::from_set(questions)),
            Err(QuestionSetError::Question { index, source }) => {
                tracing::warn!(index, %source, "rejected question data");
                Err(QuizError::InvalidQuestionData { index, source })
            }
            Err(_) => Err(QuizError::Empty),
        }
    }

    #[must_use]
    pub fn from_set(questions: QuestionSet) -> Self {
        Self {
            questions,
            session: QuizSession::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.current_index == self.questions.len()
    }

    /// The question awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` once the quiz is finished.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.questions
            .get(self.session.current_index)
            .ok_or(QuizError::OutOfRange {
                index: self.session.current_index,
                total: self.questions.len(),
            })
    }

    /// Score `choice_index` against the current question and lock it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` if the quiz is finished,
    /// `QuizError::AlreadyAnswered` if the question was already answered, and
    /// `QuizError::InvalidChoice` if `choice_index` does not name a choice.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<AnswerResult, QuizError> {
        let question = self.current_question()?;
        if self.session.answered {
            return Err(QuizError::AlreadyAnswered);
        }

        let len = question.choice_count();
        if choice_index >= len {
            return Err(QuizError::InvalidChoice {
                choice: choice_index,
                len,
            });
        }

        let result = AnswerResult {
            choice_index,
            correct: question.is_correct(choice_index),
            correct_choice_index: question.correct_choice(),
        };

        if result.correct {
            self.session.score += 1;
        }
        self.session.answered = true;

        tracing::debug!(
            question = self.session.current_index,
            choice = choice_index,
            correct = result.correct,
            score = self.session.score,
            "answer submitted"
        );

        Ok(result)
    }

    /// Move past the answered question.
    ///
    /// Calling this on a finished quiz is a no-op that returns the current view.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` if the current question has no answer yet.
    pub fn advance(&mut self) -> Result<SessionView, QuizError> {
        if self.is_finished() {
            return Ok(self.view());
        }
        if !self.session.answered {
            return Err(QuizError::NotAnswered);
        }

        self.session.current_index += 1;
        self.session.answered = false;

        if self.is_finished() {
            tracing::info!(
                score = self.session.score,
                total = self.total(),
                "quiz finished"
            );
        } else {
            tracing::debug!(question = self.session.current_index, "advanced");
        }

        Ok(self.view())
    }

    /// Start over from the first question with a zero score.
    pub fn restart(&mut self) -> SessionView {
        self.session = QuizSession::new();
        tracing::info!(total = self.total(), "quiz restarted");
        self.view()
    }

    /// Final tally.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFinished` while questions remain.
    pub fn results(&self) -> Result<ResultsView, QuizError> {
        if !self.is_finished() {
            return Err(QuizError::NotFinished);
        }
        Ok(ResultsView {
            score: self.session.score,
            total: self.total(),
        })
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            current_index: self.session.current_index,
            total: self.total(),
            score: self.session.score,
            answered: self.session.answered,
            is_finished: self.is_finished(),
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("questions_len", &self.questions.len())
            .field("current_index", &self.session.current_index)
            .field("score", &self.session.score)
            .field("answered", &self.session.answered)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A quiz of 1..8 questions with 2..5 choices each, paired with the answer picked
    /// for each question.
    fn arb_quiz() -> impl Strategy<Value = (Vec<Question>, Vec<usize>)> {
        prop::collection::vec((2_usize..5).prop_flat_map(|n| (Just(n), 0..n, 0..n)), 1..8)
            .prop_map(|specs| {
                let mut questions = Vec::with_capacity(specs.len());
                let mut picks = Vec::with_capacity(specs.len());
                for (i, (n, correct, pick)) in specs.into_iter().enumerate() {
                    let choices = (0..n).map(|c| format!("choice {c}"));
                    questions.push(Question::new(format!("Q{i}"), choices, correct).unwrap());
                    picks.push(pick);
                }
                (questions, picks)
            })
    }

    proptest! {
        #[test]
        fn score_is_monotonic_and_bounded((questions, picks) in arb_quiz()) {
            let total = questions.len();
            let mut quiz = QuizController::new(questions).unwrap();
            let mut last = 0;

            for pick in picks {
                quiz.submit_answer(pick).unwrap();
                let score = quiz.session().score();
                prop_assert!(score >= last, "score went down");
                prop_assert!(score <= total, "score above total");
                last = score;
                quiz.advance().unwrap();
            }

            prop_assert!(quiz.is_finished());
            prop_assert_eq!(quiz.results().unwrap().score, last);
        }

        #[test]
        fn answering_every_question_finishes((questions, picks) in arb_quiz()) {
            let total = questions.len();
            let mut quiz = QuizController::new(questions).unwrap();

            for (advanced, pick) in picks.into_iter().enumerate() {
                prop_assert!(!quiz.is_finished());
                prop_assert_eq!(quiz.view().current_index, advanced);
                quiz.submit_answer(pick).unwrap();
                quiz.advance().unwrap();
            }

            prop_assert!(quiz.is_finished());
            prop_assert_eq!(quiz.results().unwrap().total, total);
        }

        #[test]
        fn restart_matches_fresh_session(
            (questions, picks) in arb_quiz(),
            steps in 0_usize..16,
        ) {
            let fresh = QuizController::new(questions.clone()).unwrap();
            let mut quiz = QuizController::new(questions).unwrap();

            for _ in 0..steps {
                if quiz.session().answered() {
                    quiz.advance().unwrap();
                } else if let Some(&pick) = picks.get(quiz.view().current_index) {
                    quiz.submit_answer(pick).unwrap();
                }
            }

            prop_assert_eq!(quiz.restart(), fresh.view());
            prop_assert_eq!(quiz.session(), fresh.session());
        }
    }
}
