use serde::{Deserialize, Serialize};

use crate::model::{Category, FormId};

/// The questionnaire assigned to a user, as returned by form retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
    pub id: FormId,
    pub title: String,
    pub categories: Vec<Category>,
}

impl UserForm {
    /// Total question count across all categories.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.categories
            .iter()
            .map(Category::question_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionType};

    #[test]
    fn question_count_spans_categories() {
        let question = Question {
            question_type: QuestionType::Agree,
            agree: true,
            text: "q".into(),
        };
        let form = UserForm {
            id: FormId::new(1),
            title: "Wellbeing check".into(),
            categories: vec![
                Category {
                    title: "Sleep".into(),
                    questions: vec![question.clone(), question.clone()],
                },
                Category {
                    title: "Diet".into(),
                    questions: vec![question],
                },
            ],
        };

        assert_eq!(form.question_count(), 3);
    }
}
