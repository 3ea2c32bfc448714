use std::f64::consts::TAU;
use std::fmt::Write as _;

use crate::{ChartRenderer, RenderError, SeriesPoint};

/// Radial scale ceiling; values beyond it are drawn outside the outer ring.
const SCALE_MAX: f64 = 100.0;
/// One grid ring per scale step.
const RING_STEP: f64 = 10.0;

const FILL: &str = "rgba(208, 215, 221, 0.5)";
const STROKE: &str = "rgb(208, 215, 221)";
const STROKE_WIDTH: f64 = 3.0;
const POINT_RADIUS: f64 = 5.0;
const GRID_COLOR: &str = "black";

/// Standalone SVG radar chart: one axis per series point, grid rings every
/// ten scale units, a filled value polygon, and per-point score colors.
#[derive(Debug, Clone)]
pub struct SvgRadarChart {
    size: f64,
}

impl SvgRadarChart {
    #[must_use]
    pub fn new() -> Self {
        Self { size: 400.0 }
    }

    /// Chart with a custom square canvas, in pixels.
    #[must_use]
    pub fn with_size(size: u32) -> Self {
        Self {
            size: f64::from(size),
        }
    }

    fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Axis radius, leaving a margin for the labels.
    fn radius(&self) -> f64 {
        self.size * 0.36
    }

    /// Position on axis `index` of `count` at `value` scale units from the
    /// center. Axis 0 points straight up; the rest follow clockwise.
    fn plot(&self, index: usize, count: usize, value: f64) -> (f64, f64) {
        #[allow(clippy::cast_precision_loss)]
        let angle = TAU * (index as f64) / (count as f64) - TAU / 4.0;
        let r = self.radius() * value / SCALE_MAX;
        (
            self.center() + r * angle.cos(),
            self.center() + r * angle.sin(),
        )
    }
}

impl Default for SvgRadarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for SvgRadarChart {
    fn render(&self, series: &[SeriesPoint]) -> Result<String, RenderError> {
        if series.is_empty() {
            return Err(RenderError::EmptySeries);
        }

        let count = series.len();
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            size = self.size,
        );

        // Grid rings, innermost first.
        let mut ring = RING_STEP;
        while ring <= SCALE_MAX {
            let points = polygon_points(count, |index| self.plot(index, count, ring));
            let _ = write!(
                svg,
                r#"<polygon points="{points}" fill="none" stroke="{GRID_COLOR}" stroke-width="0.5"/>"#,
            );
            ring += RING_STEP;
        }

        // Angle lines from the center to the outer ring.
        for index in 0..count {
            let (x, y) = self.plot(index, count, SCALE_MAX);
            let _ = write!(
                svg,
                r#"<line x1="{cx:.1}" y1="{cy:.1}" x2="{x:.1}" y2="{y:.1}" stroke="{GRID_COLOR}" stroke-width="0.5"/>"#,
                cx = self.center(),
                cy = self.center(),
            );
        }

        // Value polygon.
        let points = polygon_points(count, |index| self.plot(index, count, series[index].value));
        let _ = write!(
            svg,
            r#"<polygon points="{points}" fill="{FILL}" stroke="{STROKE}" stroke-width="{STROKE_WIDTH}"/>"#,
        );

        // Data points, colored by score.
        for (index, point) in series.iter().enumerate() {
            let (x, y) = self.plot(index, count, point.value);
            let _ = write!(
                svg,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="{POINT_RADIUS}" fill="{color}"/>"#,
                color = point.color,
            );
        }

        // Axis labels just beyond the outer ring.
        for (index, point) in series.iter().enumerate() {
            let (x, y) = self.plot(index, count, SCALE_MAX * 1.18);
            let _ = write!(
                svg,
                r#"<text x="{x:.1}" y="{y:.1}" font-size="16" font-weight="bold" text-anchor="middle">{label}</text>"#,
                label = escape_text(&point.label),
            );
        }

        svg.push_str("</svg>");
        Ok(svg)
    }
}

fn polygon_points(count: usize, position: impl Fn(usize) -> (f64, f64)) -> String {
    let mut out = String::new();
    for index in 0..count {
        let (x, y) = position(index);
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{x:.1},{y:.1}");
    }
    out
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64, color: &'static str) -> SeriesPoint {
        SeriesPoint {
            label: label.into(),
            value,
            color,
        }
    }

    #[test]
    fn empty_series_is_an_error() {
        let chart = SvgRadarChart::new();
        assert_eq!(chart.render(&[]), Err(RenderError::EmptySeries));
    }

    #[test]
    fn renders_one_point_and_label_per_axis() {
        let chart = SvgRadarChart::new();
        let series = vec![
            point("Sleep", 25.0, "#22AF49"),
            point("Diet", 10.0, "#FF4740"),
            point("Mood", 0.0, "#FF4740"),
        ];

        let svg = chart.render(&series).unwrap();

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">Sleep</text>"));
        assert!(svg.contains(">Diet</text>"));
        assert!(svg.contains(">Mood</text>"));
        assert!(svg.contains(r##"fill="#22AF49""##));
    }

    #[test]
    fn first_axis_points_straight_up() {
        let chart = SvgRadarChart::with_size(400);
        let series = vec![
            point("Up", 100.0, "#22AF49"),
            point("B", 0.0, "#FF4740"),
            point("C", 0.0, "#FF4740"),
            point("D", 0.0, "#FF4740"),
        ];

        let svg = chart.render(&series).unwrap();

        // Axis 0 at full scale sits at (center, center - radius) = (200, 56).
        assert!(svg.contains(r#"<circle cx="200.0" cy="56.0""#));
    }

    #[test]
    fn values_beyond_the_scale_are_not_clamped() {
        let chart = SvgRadarChart::with_size(400);
        let series = vec![
            point("Over", 150.0, "#22AF49"),
            point("B", 0.0, "#FF4740"),
            point("C", 0.0, "#FF4740"),
        ];

        let svg = chart.render(&series).unwrap();

        // 150 scale units on a 144px radius: 216px above the 200px center.
        assert!(svg.contains(r#"<circle cx="200.0" cy="-16.0""#));
    }

    #[test]
    fn labels_are_escaped() {
        let chart = SvgRadarChart::new();
        let series = vec![
            point("A & B", 1.0, "#FF4740"),
            point("C", 1.0, "#FF4740"),
            point("D", 1.0, "#FF4740"),
        ];

        let svg = chart.render(&series).unwrap();
        assert!(svg.contains("A &amp; B"));
    }

    #[test]
    fn draws_ten_grid_rings() {
        let chart = SvgRadarChart::new();
        let series = vec![
            point("A", 5.0, "#FF4740"),
            point("B", 5.0, "#FF4740"),
            point("C", 5.0, "#FF4740"),
        ];

        let svg = chart.render(&series).unwrap();

        // 10 rings + 1 value polygon.
        assert_eq!(svg.matches("<polygon").count(), 11);
    }
}
