//! Radial (Donut) Chart
//!
//! Proportional ring slices drawn as SVG paths. Angles are measured from
//! 12 o'clock, clockwise. Percentages in the legend are always recomputed
//! from the raw values so the displayed share can never drift from the
//! displayed amount.

use leptos::*;

/// One labeled slice of the donut.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Segment {
    pub fn new(label: &str, value: f64, color: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// Angular placement of one wedge, degrees from 12 o'clock clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub start_deg: f64,
    pub span_deg: f64,
}

/// Lay out wedges in input order. Returns an empty layout when the series
/// is empty or its sum is not positive (nothing is drawn, never an error).
pub fn wedge_layout(values: &[f64]) -> Vec<Wedge> {
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut current = 0.0;
    values
        .iter()
        .map(|value| {
            let span = 360.0 * value / total;
            let wedge = Wedge {
                start_deg: current,
                span_deg: span,
            };
            current += span;
            wedge
        })
        .collect()
}

/// Share of `value` in `total` as a rounded whole percentage.
pub fn percentage(value: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as u32
}

fn polar(center: f64, radius: f64, deg: f64) -> (f64, f64) {
    // Rotate -90 degrees so 0 sits at 12 o'clock.
    let rad = (deg - 90.0).to_radians();
    (center + radius * rad.cos(), center + radius * rad.sin())
}

/// SVG path for a ring slice between `radius - thickness` and `radius`:
/// outer arc clockwise, radial line, inner arc counter-clockwise, close.
pub fn wedge_path(center: f64, radius: f64, thickness: f64, wedge: Wedge) -> String {
    let inner = radius - thickness;
    let start = wedge.start_deg;
    let end = wedge.start_deg + wedge.span_deg;

    let (outer_sx, outer_sy) = polar(center, radius, start);
    let (outer_ex, outer_ey) = polar(center, radius, end);
    let (inner_sx, inner_sy) = polar(center, inner, start);
    let (inner_ex, inner_ey) = polar(center, inner, end);

    let large_arc = if wedge.span_deg > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} 1 {} {} L {} {} A {} {} 0 {} 0 {} {} Z",
        outer_sx,
        outer_sy,
        radius,
        radius,
        large_arc,
        outer_ex,
        outer_ey,
        inner_ex,
        inner_ey,
        inner,
        inner,
        large_arc,
        inner_sx,
        inner_sy,
    )
}

/// Donut chart with center total and an input-order legend.
#[component]
pub fn NutritionDonut(
    #[prop(into)] segments: Signal<Vec<Segment>>,
    #[prop(default = 200.0)] size: f64,
    #[prop(default = 30.0)] thickness: f64,
    #[prop(into, default = "Total".to_string())] caption: String,
) -> impl IntoView {
    let center = size / 2.0;
    let radius = size / 2.0;

    view! {
        <div class="flex flex-col items-center">
            <div class="relative" style=format!("width: {}px; height: {}px", size, size)>
                <svg
                    width=size
                    height=size
                    viewBox=format!("0 0 {} {}", size, size)
                >
                    {move || {
                        let segs = segments.get();
                        let layout = wedge_layout(
                            &segs.iter().map(|s| s.value).collect::<Vec<_>>(),
                        );
                        segs.iter()
                            .zip(layout)
                            .enumerate()
                            .map(|(i, (seg, wedge))| {
                                view! {
                                    <path
                                        d=wedge_path(center, radius, thickness, wedge)
                                        fill=seg.color.clone()
                                        class="donut-wedge"
                                        style=format!("animation-delay: {:.1}s", i as f64 * 0.1)
                                    />
                                }
                            })
                            .collect_view()
                    }}
                    // Punch-out for the center label.
                    <circle
                        cx=center
                        cy=center
                        r={radius - thickness - 5.0}
                        fill="white"
                        class="dark:fill-gray-800"
                    />
                </svg>

                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="text-center">
                        <div class="text-xl font-bold">
                            {move || {
                                let total: f64 =
                                    segments.get().iter().map(|s| s.value).sum();
                                format!("{}", total.round() as i64)
                            }}
                        </div>
                        <div class="text-sm text-gray-500">{caption}</div>
                    </div>
                </div>
            </div>

            <DonutLegend segments=segments />
        </div>
    }
}

/// Legend row per segment: label, raw value, recomputed percentage.
#[component]
fn DonutLegend(#[prop(into)] segments: Signal<Vec<Segment>>) -> impl IntoView {
    view! {
        <div class="mt-4 grid grid-cols-2 gap-4 w-full">
            {move || {
                let segs = segments.get();
                let total: f64 = segs.iter().map(|s| s.value).sum();
                segs.into_iter()
                    .map(|seg| {
                        let pct = percentage(seg.value, total);
                        view! {
                            <div class="flex items-center">
                                <div
                                    class="w-4 h-4 rounded-sm mr-2"
                                    style=format!("background-color: {}", seg.color)
                                />
                                <div>
                                    <div class="text-sm font-medium">{seg.label.clone()}</div>
                                    <div class="text-xs text-gray-500">
                                        {format!("{}g ({}%)", seg.value.round() as i64, pct)}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_spans_sum_to_full_circle() {
        let layout = wedge_layout(&[3.0, 7.0, 11.0, 2.5]);
        let total_span: f64 = layout.iter().map(|w| w.span_deg).sum();
        assert!((total_span - 360.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_macro_split_40_40_20() {
        let layout = wedge_layout(&[40.0, 40.0, 20.0]);
        assert_eq!(layout.len(), 3);
        assert!((layout[0].span_deg - 144.0).abs() < TOLERANCE);
        assert!((layout[1].span_deg - 144.0).abs() < TOLERANCE);
        assert!((layout[2].span_deg - 72.0).abs() < TOLERANCE);
        // Input order, starting at 12 o'clock.
        assert!((layout[0].start_deg - 0.0).abs() < TOLERANCE);
        assert!((layout[1].start_deg - 144.0).abs() < TOLERANCE);
        assert!((layout[2].start_deg - 288.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_wedges_have_no_gaps_or_overlaps() {
        let layout = wedge_layout(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for pair in layout.windows(2) {
            let end = pair[0].start_deg + pair[0].span_deg;
            assert!((end - pair[1].start_deg).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_degenerate_series_draw_nothing() {
        assert!(wedge_layout(&[]).is_empty());
        assert!(wedge_layout(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_percentages_recomputed_from_raw_values() {
        assert_eq!(percentage(40.0, 100.0), 40);
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(5.0, 0.0), 0);
    }

    #[test]
    fn test_large_arc_flag_switches_past_half() {
        let small = wedge_path(100.0, 100.0, 30.0, Wedge { start_deg: 0.0, span_deg: 90.0 });
        assert!(small.contains(" 0 0 1 "));

        let large = wedge_path(100.0, 100.0, 30.0, Wedge { start_deg: 0.0, span_deg: 270.0 });
        assert!(large.contains(" 0 1 1 "));
    }

    #[test]
    fn test_wedge_path_starts_at_twelve_oclock() {
        let path = wedge_path(100.0, 100.0, 30.0, Wedge { start_deg: 0.0, span_deg: 90.0 });
        // Outer start point for 0 degrees is straight up from center.
        assert!(path.starts_with("M 100 0 "));
    }
}
