mod controller;
mod session;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use controller::QuizController;
pub use session::QuizSession;
pub use view::{AnswerResult, ResultsView, SessionView};
