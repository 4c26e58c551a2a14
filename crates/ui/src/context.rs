use std::sync::Arc;

use quiz_core::model::QuestionSet;
use services::QuizController;

pub trait UiApp: Send + Sync {
    fn quiz_title(&self) -> String;
    fn questions(&self) -> QuestionSet;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    questions: QuestionSet,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.quiz_title(),
            questions: app.questions(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// A controller over the configured questions, positioned at the first one.
    #[must_use]
    pub fn start_quiz(&self) -> QuizController {
        QuizController::from_set(self.questions.clone())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
