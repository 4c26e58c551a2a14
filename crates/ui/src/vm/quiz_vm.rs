use services::{AnswerResult, QuizController, QuizError, SessionView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
    Restart,
}

/// Feedback state of a single choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    /// Selectable; the question has no answer yet.
    Open,
    /// Not picked, not the right answer.
    Locked,
    /// Picked and right.
    Correct,
    /// Picked and wrong.
    Incorrect,
    /// The right answer after a wrong pick.
    Revealed,
}

impl ChoiceState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open => "quiz-choice",
            Self::Locked => "quiz-choice quiz-choice--locked",
            Self::Correct => "quiz-choice quiz-choice--correct",
            Self::Incorrect => "quiz-choice quiz-choice--incorrect",
            Self::Revealed => "quiz-choice quiz-choice--revealed",
        }
    }

    #[must_use]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub label: String,
    pub state: ChoiceState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub text: String,
    pub progress_label: String,
    pub score_label: String,
    pub choices: Vec<ChoiceVm>,
    pub can_advance: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsScreenVm {
    pub summary_label: String,
    pub percent_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionScreenVm),
    Results(ResultsScreenVm),
}

/// Presentation state for a running quiz.
///
/// Owns the controller and remembers the last `AnswerResult` so the current question can be
/// rendered with feedback. Every label the view shows is derived here.
#[derive(Debug)]
pub struct QuizVm {
    quiz: QuizController,
    last_answer: Option<AnswerResult>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizController) -> Self {
        Self {
            quiz,
            last_answer: None,
        }
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        self.quiz.view()
    }

    #[must_use]
    pub fn last_answer(&self) -> Option<AnswerResult> {
        self.last_answer
    }

    /// Apply a user intent to the controller.
    ///
    /// # Errors
    ///
    /// Propagates the controller's `QuizError` when the intent is not valid in the
    /// current state.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), QuizError> {
        match intent {
            QuizIntent::Select(choice) => {
                let result = self.quiz.submit_answer(choice)?;
                self.last_answer = Some(result);
            }
            QuizIntent::Next => {
                self.quiz.advance()?;
                self.last_answer = None;
            }
            QuizIntent::Restart => {
                self.quiz.restart();
                self.last_answer = None;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match self.quiz.results() {
            Ok(results) => QuizScreen::Results(ResultsScreenVm {
                summary_label: format!("You scored {} out of {}!", results.score, results.total),
                percent_label: format!("{}%", results.percent()),
            }),
            Err(_) => QuizScreen::Question(self.question_screen()),
        }
    }

    fn question_screen(&self) -> QuestionScreenVm {
        let view = self.quiz.view();
        let (text, choices) = match self.quiz.current_question() {
            Ok(question) => (
                question.text().to_string(),
                question
                    .choices()
                    .iter()
                    .enumerate()
                    .map(|(index, label)| ChoiceVm {
                        index,
                        label: label.clone(),
                        state: self.choice_state(index),
                    })
                    .collect(),
            ),
            Err(_) => (String::new(), Vec::new()),
        };

        QuestionScreenVm {
            text,
            progress_label: format!("Question {} of {}", view.question_number(), view.total),
            score_label: format!("Score: {}", view.score),
            choices,
            can_advance: view.answered,
            next_label: if view.is_last_question() {
                "View Results"
            } else {
                "Next"
            },
        }
    }

    fn choice_state(&self, index: usize) -> ChoiceState {
        let Some(answer) = self.last_answer else {
            return ChoiceState::Open;
        };
        if index == answer.choice_index {
            if answer.correct {
                ChoiceState::Correct
            } else {
                ChoiceState::Incorrect
            }
        } else if index == answer.correct_choice_index {
            ChoiceState::Revealed
        } else {
            ChoiceState::Locked
        }
    }
}
