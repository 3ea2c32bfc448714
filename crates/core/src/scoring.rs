use serde::Serialize;

use crate::model::{Category, TestAnswers};

//
// ─── SCORE REPORT ──────────────────────────────────────────────────────────────
//

/// Points contributed by one affirmative answer.
const AFFIRMATIVE_POINTS: u32 = 5;

/// Multiplier from a category's raw point sum to its reported score.
const CATEGORY_SCALE: u32 = 50;

/// A category together with its derived score.
///
/// Scores are not clamped: the chart assumes a 0..100 scale, but the formula
/// below can produce values well above it (see `ScoreReport`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCategory {
    pub category: Category,
    pub score: u32,
}

impl ScoredCategory {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.category.title
    }
}

/// Outcome of scoring one test run.
///
/// `category_totals` (agree-question count × 5, per category) and `total`
/// (question count × 500, summed) are scale inputs carried over from the
/// questionnaire definition. Neither participates in the score formula:
/// per-category scores stay on the raw `points × 50` scale and `score` is
/// their plain sum. Callers that need a normalized 0..100 measure must apply
/// these totals themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub categories: Vec<ScoredCategory>,
    /// Sum of all per-category scores.
    pub score: u32,
    /// Unapplied normalization denominator.
    pub total: u32,
    /// Unapplied per-category agree totals, index-aligned with `categories`.
    pub category_totals: Vec<u32>,
}

impl ScoreReport {
    /// Per-category scores in category order.
    #[must_use]
    pub fn category_scores(&self) -> Vec<u32> {
        self.categories.iter().map(|scored| scored.score).collect()
    }
}

//
// ─── CALCULATOR ────────────────────────────────────────────────────────────────
//

/// Scores a test run against its questionnaire.
///
/// Each answer row is matched to its category by position, each answer to its
/// question likewise. An answer with no question at the same index is skipped;
/// a category with no answer row (or no questions) scores 0. An affirmative
/// flag adds 5 points, anything else adds none, and the category score is the
/// point sum times 50.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn score_test(categories: &[Category], answers: &TestAnswers) -> ScoreReport {
    let category_totals: Vec<u32> = categories
        .iter()
        .map(|category| category.agree_question_count() as u32 * AFFIRMATIVE_POINTS)
        .collect();

    let total: u32 = categories
        .iter()
        .map(|category| category.question_count() as u32 * 500)
        .sum();

    let scored: Vec<ScoredCategory> = categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let row = answers.category(index).unwrap_or(&[]);

            let mut points = 0_u32;
            for (question_index, answer) in row.iter().enumerate() {
                if category.questions.get(question_index).is_none() {
                    continue;
                }
                if answer.is_affirmative() {
                    points += AFFIRMATIVE_POINTS;
                }
            }

            ScoredCategory {
                category: category.clone(),
                score: points * CATEGORY_SCALE,
            }
        })
        .collect();

    let score = scored.iter().map(|scored| scored.score).sum();

    ScoreReport {
        categories: scored,
        score,
        total,
        category_totals,
    }
}

/// Index of the lowest-scoring category; ties go to the first minimum.
///
/// Returns `None` for an empty report.
#[must_use]
pub fn min_score_index(categories: &[ScoredCategory]) -> Option<usize> {
    categories
        .iter()
        .enumerate()
        .min_by_key(|(_, scored)| scored.score)
        .map(|(index, _)| index)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
