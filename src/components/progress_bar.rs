//! Progress Bar Component

use leptos::*;

/// Horizontal progress bar, value clamped into [0, max].
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f64>,
    #[prop(default = 100.0)] max: f64,
) -> impl IntoView {
    let width = move || {
        let pct = if max > 0.0 {
            (value.get() / max * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        format!("width: {:.0}%", pct)
    };

    view! {
        <div class="w-full h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
            <div
                class="h-full bg-emerald-500 rounded-full transition-all duration-300"
                style=width
            />
        </div>
    }
}
