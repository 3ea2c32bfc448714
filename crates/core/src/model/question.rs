use serde::{Deserialize, Serialize};

/// How a question contributes to its category's agreement measure.
///
/// Serialized by variant name; the backend's variant list is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum QuestionType {
    Agree,
    Disagree,
}

/// A single survey item. Immutable once loaded from the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_type: QuestionType,
    /// Polarity flag carried alongside the type by the backend.
    pub agree: bool,
    pub text: String,
}

impl Question {
    #[must_use]
    pub fn is_agree_type(&self) -> bool {
        self.question_type == QuestionType::Agree
    }
}
