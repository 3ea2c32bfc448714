use serde::{Deserialize, Serialize};

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// A single boolean response, encoded on the wire as an integer flag.
///
/// The backend contract names the field literally `Bool` and uses `1` for an
/// affirmative response; every other value counts as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "Bool")]
    pub flag: u8,
}

impl Answer {
    #[must_use]
    pub fn affirmative() -> Self {
        Self { flag: 1 }
    }

    #[must_use]
    pub fn negative() -> Self {
        Self { flag: 0 }
    }

    /// True only for the exact flag value `1`.
    #[must_use]
    pub fn is_affirmative(&self) -> bool {
        self.flag == 1
    }
}

/// All answers for one test run: one row per category, one entry per question.
///
/// Row and entry positions line up with the category/question sequences by
/// index. Mismatched lengths are tolerated everywhere; lookups that fall off
/// either sequence are skipped, not errored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAnswers {
    pub answers: Vec<Vec<Answer>>,
}

impl TestAnswers {
    #[must_use]
    pub fn new(answers: Vec<Vec<Answer>>) -> Self {
        Self { answers }
    }

    /// The answer row for the category at `index`, if one was recorded.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&[Answer]> {
        self.answers.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.answers.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_serializes_with_wire_field_name() {
        let json = serde_json::to_string(&Answer::affirmative()).unwrap();
        assert_eq!(json, r#"{"Bool":1}"#);
    }

    #[test]
    fn answer_deserializes_from_wire_shape() {
        let answer: Answer = serde_json::from_str(r#"{"Bool":0}"#).unwrap();
        assert_eq!(answer, Answer::negative());
        assert!(!answer.is_affirmative());
    }

    #[test]
    fn only_exact_one_is_affirmative() {
        assert!(Answer { flag: 1 }.is_affirmative());
        assert!(!Answer { flag: 0 }.is_affirmative());
        assert!(!Answer { flag: 2 }.is_affirmative());
    }

    #[test]
    fn test_answers_round_trips_nested_rows() {
        let answers = TestAnswers::new(vec![
            vec![Answer::affirmative(), Answer::negative()],
            vec![Answer::affirmative()],
        ]);

        let json = serde_json::to_string(&answers).unwrap();
        let back: TestAnswers = serde_json::from_str(&json).unwrap();

        assert_eq!(back, answers);
        assert_eq!(back.category_count(), 2);
        assert_eq!(back.category(1).unwrap().len(), 1);
        assert!(back.category(5).is_none());
    }
}
