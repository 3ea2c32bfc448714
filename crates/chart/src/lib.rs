#![forbid(unsafe_code)]

//! Rendering collaborator for score visualizations.
//!
//! Scoring stays rendering-free; presenters hand a finished series to a
//! [`ChartRenderer`] and receive the rendered artifact back.

mod svg;

use thiserror::Error;

pub use svg::SvgRadarChart;

/// One axis of the chart: a category label, its plotted value, and the
/// point color derived from the category score.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    #[error("cannot render an empty series")]
    EmptySeries,
}

/// Narrow seam between presenters and whatever draws the chart.
pub trait ChartRenderer: Send + Sync {
    /// Renders the series and returns the artifact.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` when the series cannot be drawn.
    fn render(&self, series: &[SeriesPoint]) -> Result<String, RenderError>;
}

/// Point color for a category score.
///
/// Thresholds are inclusive lower bounds on a nominal 0..100 scale; scores
/// above 100 stay green.
#[must_use]
pub fn score_color(score: u32) -> &'static str {
    if score >= 100 {
        "#22AF49"
    } else if score >= 60 {
        "#A8BF19"
    } else if score >= 40 {
        "#FFF500"
    } else if score >= 20 {
        "#FF9D47"
    } else {
        "#FF4740"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_steps_at_documented_boundaries() {
        assert_eq!(score_color(100), "#22AF49");
        assert_eq!(score_color(60), "#A8BF19");
        assert_eq!(score_color(59), "#FFF500");
        assert_eq!(score_color(40), "#FFF500");
        assert_eq!(score_color(39), "#FF9D47");
        assert_eq!(score_color(20), "#FF9D47");
        assert_eq!(score_color(19), "#FF4740");
        assert_eq!(score_color(0), "#FF4740");
    }

    #[test]
    fn out_of_scale_scores_stay_green() {
        assert_eq!(score_color(250), "#22AF49");
    }
}
