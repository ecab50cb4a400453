//! Hand-written SVG rendering of a sweep

use crate::sweep::SweepResult;
use std::fmt::Write as _;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TICKS: usize = 5;

pub const TITLE: &str = "MABK Inequality Violation for 3-Qubit System";
pub const X_LABEL: &str = "Measurement Angle (θ)";
pub const Y_LABEL: &str = "MABK Witness";

/// Linear map from data space to pixel space
struct Axes {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Axes {
    fn fit(result: &SweepResult) -> Self {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (-result.bound, result.bound);
        for p in &result.points {
            x_min = x_min.min(p.theta);
            x_max = x_max.max(p.theta);
            y_min = y_min.min(p.witness);
            y_max = y_max.max(p.witness);
        }
        if !x_min.is_finite() || x_max <= x_min {
            x_min = 0.0;
            x_max = x_min.max(x_max).max(1.0);
        }
        let pad = 0.1 * (y_max - y_min).max(1.0);
        Self {
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
        }
    }

    fn x(&self, theta: f64) -> f64 {
        let span = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (theta - self.x_min) / (self.x_max - self.x_min) * span
    }

    fn y(&self, value: f64) -> f64 {
        let span = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        HEIGHT - MARGIN_BOTTOM - (value - self.y_min) / (self.y_max - self.y_min) * span
    }
}

/// Render the sweep as a standalone SVG document
pub fn render_svg(result: &SweepResult) -> String {
    let axes = Axes::fit(result);
    let mut svg = String::new();
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    // fmt::Write into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="18">{TITLE}</text>"#,
        WIDTH / 2.0,
        MARGIN_TOP / 2.0
    );

    // frame and grid
    let _ = writeln!(
        svg,
        r#"<rect x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="black"/>"#,
        right - left,
        bottom - top
    );
    for i in 0..=TICKS {
        let frac = i as f64 / TICKS as f64;
        let theta = axes.x_min + frac * (axes.x_max - axes.x_min);
        let value = axes.y_min + frac * (axes.y_max - axes.y_min);
        let (x, y) = (axes.x(theta), axes.y(value));
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="12">{theta:.2}</text>"#,
            bottom + 18.0
        );
        let _ = writeln!(
            svg,
            r##"<line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{value:.2}</text>"#,
            left - 8.0,
            y + 4.0
        );
    }

    // classical bound
    let bound_y = axes.y(result.bound);
    let _ = writeln!(
        svg,
        r##"<line x1="{left:.1}" y1="{bound_y:.1}" x2="{right:.1}" y2="{bound_y:.1}" stroke="#d62728" stroke-width="1.5" stroke-dasharray="8 5"/>"##
    );

    // witness curve
    let points: Vec<String> = result
        .points
        .iter()
        .map(|p| format!("{:.2},{:.2}", axes.x(p.theta), axes.y(p.witness)))
        .collect();
    let _ = writeln!(
        svg,
        r##"<polyline points="{}" fill="none" stroke="#1f77b4" stroke-width="2"/>"##,
        points.join(" ")
    );

    // labels and legend
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{X_LABEL}</text>"#,
        (left + right) / 2.0,
        HEIGHT - 20.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {:.1})">{Y_LABEL}</text>"#,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0
    );
    let legend_x = right - 190.0;
    let legend_y = top + 20.0;
    let _ = writeln!(
        svg,
        r##"<line x1="{legend_x:.1}" y1="{legend_y:.1}" x2="{:.1}" y2="{legend_y:.1}" stroke="#1f77b4" stroke-width="2"/>"##,
        legend_x + 30.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="12">MABK Witness</text>"#,
        legend_x + 38.0,
        legend_y + 4.0
    );
    let _ = writeln!(
        svg,
        r##"<line x1="{legend_x:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="#d62728" stroke-width="1.5" stroke-dasharray="8 5"/>"##,
        legend_y + 20.0,
        legend_x + 30.0,
        legend_y + 20.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" font-size="12">Classical Bound ({})</text>"#,
        legend_x + 38.0,
        legend_y + 24.0,
        result.bound
    );

    svg.push_str("</svg>\n");
    svg
}
