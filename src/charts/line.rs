//! Time-Series (Line) Chart
//!
//! Canvas line chart with axes, gridlines, and a 1-second reveal animation.
//! Scaling math is pure and index-based: points are spaced equally
//! regardless of the gaps between their dates.

use chrono::{Datelike, NaiveDate};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::charts::animation::{self, AnimationToken};

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 300;
const PADDING: f64 = 40.0;
const GRID_STEPS: usize = 5;
const POINT_RADIUS: f64 = 3.0;
const ANIMATION_MS: f64 = 1000.0;

const AXIS_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";

/// One chronological sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Vertical scale with a 5% padding band on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// A range with no height cannot position values (all-zero series).
    pub fn is_degenerate(&self) -> bool {
        self.max - self.min <= 0.0
    }

    /// Fraction of the plot height for `value`, 0 at `min`, 1 at `max`.
    /// Callers must check [`ValueRange::is_degenerate`] first.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Gridline label value for line `i` of `steps`, bottom to top.
    pub fn grid_value(&self, i: usize, steps: usize) -> f64 {
        self.min + (i as f64 / steps as f64) * (self.max - self.min)
    }
}

/// Compute the padded vertical range: `[0.95 * min, 1.05 * max]`.
/// `None` for an empty series. An all-zero series collapses to
/// `min == max == 0`, which callers must treat as degenerate.
pub fn value_range(values: &[f64]) -> Option<ValueRange> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if values.is_empty() {
        return None;
    }
    Some(ValueRange {
        min: min * 0.95,
        max: max * 1.05,
    })
}

/// Horizontal position of point `i` of `n` as a fraction of the plot
/// width. Equal index spacing; a single point sits at the left edge.
pub fn x_fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    i as f64 / (n - 1) as f64
}

/// Stride between x-axis labels so at most ~6 appear.
pub fn label_stride(n: usize) -> usize {
    (n / 5).max(1)
}

/// How many points are visible at progress `p`.
pub fn revealed_points(n: usize, p: f64) -> usize {
    ((n as f64 * p).floor() as usize).min(n)
}

/// Abbreviated month + day, e.g. "Aug 29".
pub fn tick_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

/// Animated line chart for one numeric series.
#[component]
pub fn ProgressChart(
    #[prop(into)] data: Signal<Vec<TimePoint>>,
    #[prop(into, default = "#10B981".to_string())] color: String,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Token for the in-flight reveal; replaced (and the old one revoked)
    // whenever the source data changes.
    let running = store_value(AnimationToken::new());

    create_effect(move |_| {
        let points = data.get();

        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        running.update_value(|token| token.revoke());
        let token = AnimationToken::new();
        running.set_value(token.clone());

        let color = color.clone();
        if points.is_empty() {
            // Empty series draws nothing.
            if let Some(ctx) = context_2d(&canvas) {
                ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
            }
            return;
        }

        let canvas: HtmlCanvasElement = (*canvas).clone();
        animation::animate(ANIMATION_MS, token, move |p| {
            draw_frame(&canvas, &points, &color, p);
        });
    });

    view! {
        <div class="w-full">
            {title.map(|t| view! { <h3 class="text-lg font-semibold mb-2">{t}</h3> })}
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full h-[300px] rounded-lg bg-white dark:bg-gray-800"
            />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw one full frame: clear, axes, gridlines, labels, then the first
/// `floor(N * p)` points of the series. No incremental diffing.
fn draw_frame(canvas: &HtmlCanvasElement, points: &[TimePoint], color: &str, p: f64) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot_width = width - PADDING * 2.0;
    let plot_height = height - PADDING * 2.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Axes.
    ctx.begin_path();
    ctx.set_stroke_style(&AXIS_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.move_to(PADDING, PADDING);
    ctx.line_to(PADDING, height - PADDING);
    ctx.line_to(width - PADDING, height - PADDING);
    ctx.stroke();

    let values: Vec<f64> = points.iter().map(|pt| pt.value).collect();
    let range = match value_range(&values) {
        Some(range) => range,
        None => return,
    };

    // Gridlines and y labels, even when the data path is skipped.
    ctx.set_font("10px sans-serif");
    for i in 0..=GRID_STEPS {
        let y = PADDING + plot_height - (i as f64 / GRID_STEPS as f64) * plot_height;

        ctx.begin_path();
        ctx.set_stroke_style(&AXIS_COLOR.into());
        ctx.move_to(PADDING, y);
        ctx.line_to(width - PADDING, y);
        ctx.stroke();

        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(
            &format!("{:.1}", range.grid_value(i, GRID_STEPS)),
            PADDING - 5.0,
            y,
        );
    }

    // X labels at a stride keeping at most ~6 visible.
    let n = points.len();
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for i in (0..n).step_by(label_stride(n)) {
        let x = PADDING + x_fraction(i, n) * plot_width;
        let _ = ctx.fill_text(&tick_label(points[i].date), x, height - PADDING + 5.0);
    }

    // Degenerate scale (all-zero series): frame only, skip the data path.
    if range.is_degenerate() {
        return;
    }

    let position = |i: usize| -> (f64, f64) {
        let x = PADDING + x_fraction(i, n) * plot_width;
        let y = PADDING + plot_height - range.fraction(points[i].value) * plot_height;
        (x, y)
    };

    let visible = revealed_points(n, p);

    // Connecting segments between revealed points.
    ctx.begin_path();
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    for i in 0..visible {
        let (x, y) = position(i);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers.
    ctx.set_fill_style(&color.into());
    for i in 0..visible {
        let (x, y) = position(i);
        ctx.begin_path();
        let _ = ctx.arc(x, y, POINT_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_range_pads_five_percent_each_side() {
        let range = value_range(&[10.0, 20.0, 30.0]).unwrap();
        assert!((range.min - 9.5).abs() < TOLERANCE);
        assert!((range.max - 31.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_monotonic_series_bounds() {
        let values: Vec<f64> = (1..=30).map(|i| i as f64).collect();
        let range = value_range(&values).unwrap();
        assert!((range.max - 30.0 * 1.05).abs() < TOLERANCE);
        assert!((range.min - 0.95).abs() < TOLERANCE);
        assert!(!range.is_degenerate());
    }

    #[test]
    fn test_all_zero_series_is_degenerate_not_nan() {
        let range = value_range(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 0.0);
        assert!(range.is_degenerate());
        // Degenerate ranges are skipped before fraction() is ever called,
        // so no NaN reaches the draw path.
    }

    #[test]
    fn test_flat_nonzero_series_still_has_height() {
        let range = value_range(&[50.0, 50.0]).unwrap();
        assert!(!range.is_degenerate());
        assert!((range.fraction(50.0) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_series_has_no_range() {
        assert!(value_range(&[]).is_none());
    }

    #[test]
    fn test_single_point_does_not_divide_by_zero() {
        assert_eq!(x_fraction(0, 1), 0.0);
        // One point, no line segment: a 1-point series reveals one marker.
        assert_eq!(revealed_points(1, 1.0), 1);
    }

    #[test]
    fn test_x_positions_are_index_spaced() {
        assert_eq!(x_fraction(0, 5), 0.0);
        assert!((x_fraction(2, 5) - 0.5).abs() < TOLERANCE);
        assert_eq!(x_fraction(4, 5), 1.0);
    }

    #[test]
    fn test_label_stride_caps_label_count() {
        assert_eq!(label_stride(1), 1);
        assert_eq!(label_stride(4), 1);
        assert_eq!(label_stride(10), 2);
        assert_eq!(label_stride(30), 6);
        // Once the stride formula engages, label count stays near 5.
        for n in 10..200 {
            let labels = (0..n).step_by(label_stride(n)).count();
            assert!((5..=7).contains(&labels), "{} labels for n={}", labels, n);
        }
    }

    #[test]
    fn test_reveal_follows_floor_of_progress() {
        assert_eq!(revealed_points(30, 0.0), 0);
        assert_eq!(revealed_points(30, 0.5), 15);
        assert_eq!(revealed_points(30, 0.99), 29);
        assert_eq!(revealed_points(30, 1.0), 30);
    }

    #[test]
    fn test_tick_label_format() {
        let date: NaiveDate = "2026-08-09".parse().unwrap();
        assert_eq!(tick_label(date), "Aug 9");
    }

    #[test]
    fn test_grid_values_span_the_range() {
        let range = ValueRange { min: 10.0, max: 20.0 };
        assert!((range.grid_value(0, 5) - 10.0).abs() < TOLERANCE);
        assert!((range.grid_value(5, 5) - 20.0).abs() < TOLERANCE);
        assert!((range.grid_value(2, 5) - 14.0).abs() < TOLERANCE);
    }
}
