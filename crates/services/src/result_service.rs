use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use chart::{ChartRenderer, SeriesPoint, score_color};
use tracing::debug;
use wellcheck_core::model::{Category, ResultRecord, TestAnswers};
use wellcheck_core::scoring::{ScoreReport, min_score_index, score_test};

use crate::api::{ApiClient, Endpoint, Transport};
use crate::error::{ApiError, ResultError};

//
// ─── BACKEND SURFACE ───────────────────────────────────────────────────────────
//

/// Read-side backend contract the presenter depends on.
#[async_trait]
pub trait SurveyApi: Send + Sync {
    /// Test definition: the ordered category sequence.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on gateway failures.
    async fn test_data(&self) -> Result<Vec<Category>, ApiError>;

    /// Results catalog, ordered like the category sequence.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on gateway failures.
    async fn results_catalog(&self) -> Result<Vec<ResultRecord>, ApiError>;
}

#[async_trait]
impl SurveyApi for ApiClient {
    async fn test_data(&self) -> Result<Vec<Category>, ApiError> {
        self.get(Endpoint::TestData, Transport::Intercepted).await
    }

    async fn results_catalog(&self) -> Result<Vec<ResultRecord>, ApiError> {
        self.get(Endpoint::UserTest, Transport::Intercepted).await
    }
}

//
// ─── PRESENTER ─────────────────────────────────────────────────────────────────
//

/// Fully presented outcome of one test run.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub report: ScoreReport,
    /// Descriptive record for the weakest category, when the catalog has one
    /// at that index.
    pub result: Option<ResultRecord>,
    /// Rendered chart artifact.
    pub chart: String,
}

/// Presents a completed test: scores it, picks the matching catalog record,
/// and renders the per-category radar series.
///
/// Both collaborators are injected; scoring itself stays free of any
/// rendering or transport dependency.
pub struct ResultService {
    api: Arc<dyn SurveyApi>,
    renderer: Arc<dyn ChartRenderer>,
}

impl ResultService {
    #[must_use]
    pub fn new(api: Arc<dyn SurveyApi>, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { api, renderer }
    }

    /// Runs the full presentation flow for one answer set.
    ///
    /// The test definition fetch and the answers source run concurrently;
    /// the flow proceeds once both have produced a value. The catalog record
    /// is the one at the first lowest-scoring category's index; a catalog
    /// shorter than that index yields no record.
    ///
    /// # Errors
    ///
    /// Returns `ResultError::Api` on gateway failures and
    /// `ResultError::Render` when the series cannot be drawn.
    pub async fn present<F>(&self, answers: F) -> Result<TestResult, ResultError>
    where
        F: Future<Output = TestAnswers> + Send,
    {
        let (categories, answers) = tokio::join!(self.api.test_data(), answers);
        let categories = categories?;

        let report = score_test(&categories, &answers);
        debug!(score = report.score, categories = report.categories.len(), "test scored");

        let catalog = self.api.results_catalog().await?;
        let result = min_score_index(&report.categories)
            .and_then(|index| catalog.get(index).cloned());

        let series = build_series(&report);
        let chart = self.renderer.render(&series)?;

        Ok(TestResult {
            report,
            result,
            chart,
        })
    }
}

/// One radar axis per category: title, score on the chart's 0..100 scale
/// (score / 10, unclamped), and the score color.
fn build_series(report: &ScoreReport) -> Vec<SeriesPoint> {
    report
        .categories
        .iter()
        .map(|scored| SeriesPoint {
            label: scored.title().to_owned(),
            value: f64::from(scored.score) / 10.0,
            color: score_color(scored.score),
        })
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
