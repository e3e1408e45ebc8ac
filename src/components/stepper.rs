//! Stepper Component
//!
//! Horizontal step indicator for the onboarding wizard. Completed steps
//! are clickable so users can go back and edit earlier answers.

use leptos::*;

#[component]
pub fn Stepper(
    steps: Vec<&'static str>,
    #[prop(into)] current: Signal<u8>,
    #[prop(into)] on_step_click: Callback<u8>,
) -> impl IntoView {
    let count = steps.len();

    view! {
        <div class="flex items-center mb-8">
            {steps
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    let step = (i + 1) as u8;
                    let is_last = i + 1 == count;

                    let state_class = move || {
                        let now = current.get();
                        if step < now {
                            "bg-emerald-500 text-white cursor-pointer"
                        } else if step == now {
                            "bg-emerald-500 text-white ring-4 ring-emerald-100 dark:ring-emerald-900"
                        } else {
                            "bg-gray-200 dark:bg-gray-700 text-gray-500 dark:text-gray-400"
                        }
                    };

                    view! {
                        <div class="flex items-center flex-1 last:flex-none">
                            <div class="flex flex-col items-center">
                                <button
                                    class=move || {
                                        format!(
                                            "w-10 h-10 rounded-full flex items-center justify-center \
                                             font-semibold transition-colors {}",
                                            state_class(),
                                        )
                                    }
                                    on:click=move |_| {
                                        // Only already-visited steps are reachable by click.
                                        if step <= current.get() {
                                            on_step_click.call(step);
                                        }
                                    }
                                >
                                    {step}
                                </button>
                                <span class="mt-2 text-xs text-gray-600 dark:text-gray-400 text-center">
                                    {label}
                                </span>
                            </div>

                            {(!is_last)
                                .then(|| {
                                    view! {
                                        <div class=move || {
                                            let done = step < current.get();
                                            format!(
                                                "flex-1 h-0.5 mx-2 {}",
                                                if done {
                                                    "bg-emerald-500"
                                                } else {
                                                    "bg-gray-200 dark:bg-gray-700"
                                                },
                                            )
                                        } />
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
