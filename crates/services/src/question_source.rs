use std::path::PathBuf;

use quiz_core::model::{QuestionDraft, QuestionSet};

use crate::error::QuestionSourceError;

/// Supplies the fixed question list a quiz is built from.
pub trait QuestionSource {
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the questions cannot be read or are invalid.
    fn load(&self) -> Result<QuestionSet, QuestionSourceError>;
}

//
// ─── BUILT-IN ──────────────────────────────────────────────────────────────────
//

/// The ten general-knowledge questions shipped with the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestions;

const BUILTIN: &[(&str, [&str; 4], usize)] = &[
    ("What is the capital of France?", ["Berlin", "Madrid", "Paris", "Lisbon"], 2),
    ("What is 2 + 2?", ["3", "4", "5", "6"], 1),
    ("What is the capital of Lithuania?", ["Berlin", "Kaunas", "Vilnius", "Panevezys"], 2),
    ("What is 2 + 5?", ["3", "4", "5", "7"], 3),
    ("What is biggest river of Lithuania?", ["Nevezis", "Sventoji", "Nemunas", "Neris"], 2),
    ("What is 5 * 5", ["3", "20", "10", "25"], 3),
    ("What color is grass?", ["blue", "red", "green", "yellow"], 2),
    ("What is 50 / 10?", ["1", "4", "5", "6"], 2),
    ("What is largest planet in Solar system?", ["Mars", "Earth", "Jupiter", "Venus"], 2),
    ("What is 60 - 20?", ["30", "40", "50", "60"], 1),
];

impl QuestionSource for BuiltinQuestions {
    fn load(&self) -> Result<QuestionSet, QuestionSourceError> {
        let drafts = BUILTIN
            .iter()
            .map(|(text, choices, correct)| QuestionDraft::new(*text, *choices, *correct))
            .collect();
        let set = QuestionSet::from_drafts(drafts)?;
        tracing::debug!(count = set.len(), "loaded built-in questions");
        Ok(set)
    }
}

//
// ─── JSON FILE ─────────────────────────────────────────────────────────────────
//

/// Questions read from a local JSON document.
///
/// The document is an array of `{ "question", "choices", "correctAnswerIndex" }` objects.
#[derive(Debug, Clone)]
pub struct JsonQuestionFile {
    path: PathBuf,
}

impl JsonQuestionFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for JsonQuestionFile {
    fn load(&self) -> Result<QuestionSet, QuestionSourceError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| QuestionSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let set = parse_questions_json(&raw)?;
        tracing::info!(path = %self.path.display(), count = set.len(), "loaded question file");
        Ok(set)
    }
}

/// Parse and validate a JSON question document.
///
/// # Errors
///
/// Returns `QuestionSourceError::Parse` for malformed JSON and
/// `QuestionSourceError::Invalid` for an empty list or an invalid question.
pub fn parse_questions_json(raw: &str) -> Result<QuestionSet, QuestionSourceError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(raw)?;
    Ok(QuestionSet::from_drafts(drafts)?)
}
