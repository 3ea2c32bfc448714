use serde::{Deserialize, Serialize};

use crate::model::Question;

/// A named group of questions; one category per axis on the result chart.
///
/// Categories carry no identifier of their own. They are addressed by
/// position in the sequence the backend returns, and answer rows line up
/// with that same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub questions: Vec<Question>,
}

impl Category {
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions typed `Agree` in this category.
    #[must_use]
    pub fn agree_question_count(&self) -> usize {
        self.questions
            .iter()
            .filter(|question| question.is_agree_type())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;

    fn question(question_type: QuestionType) -> Question {
        Question {
            question_type,
            agree: question_type == QuestionType::Agree,
            text: "q".into(),
        }
    }

    #[test]
    fn counts_only_agree_typed_questions() {
        let category = Category {
            title: "Sleep".into(),
            questions: vec![
                question(QuestionType::Agree),
                question(QuestionType::Disagree),
                question(QuestionType::Agree),
            ],
        };

        assert_eq!(category.question_count(), 3);
        assert_eq!(category.agree_question_count(), 2);
    }

    #[test]
    fn empty_category_has_zero_counts() {
        let category = Category {
            title: "Empty".into(),
            questions: Vec::new(),
        };
        assert_eq!(category.question_count(), 0);
        assert_eq!(category.agree_question_count(), 0);
    }
}
