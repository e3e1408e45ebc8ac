//! Dashboard Page
//!
//! Weekly plan view: day selector, meal cards, macro donut, and the
//! animated progress chart with a selectable metric.

use chrono::Datelike;
use leptos::*;

use crate::charts::line::{ProgressChart, TimePoint};
use crate::charts::radial::{NutritionDonut, Segment};
use crate::components::link::NavLink;
use crate::components::meal_card::{MealCard, MealCardProps};
use crate::components::progress_bar::ProgressBar;
use crate::router::paths;
use crate::state::onboarding::OnboardingState;
use crate::state::plan::{MealSlot, PlanState, ProgressEntry};

const PROTEIN_COLOR: &str = "#3B82F6";
const CARBS_COLOR: &str = "#10B981";
const FATS_COLOR: &str = "#F97316";

/// Which progress series the line chart shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProgressMetric {
    Weight,
    Calories,
    Adherence,
}

impl ProgressMetric {
    fn label(self) -> &'static str {
        match self {
            ProgressMetric::Weight => "Weight",
            ProgressMetric::Calories => "Calories",
            ProgressMetric::Adherence => "Adherence",
        }
    }

    fn value_of(self, entry: &ProgressEntry) -> f64 {
        match self {
            ProgressMetric::Weight => entry.weight,
            ProgressMetric::Calories => entry.calories,
            ProgressMetric::Adherence => entry.adherence,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let plan = use_context::<PlanState>().expect("PlanState not found");

    // Track only whether a plan exists. In-place edits (meal swaps,
    // regeneration) keep the presence flag stable, so the plan view and
    // its selection state survive them instead of remounting.
    let has_plan = create_memo(move |_| plan.plan.with(Option::is_some));

    view! {
        {move || {
            if has_plan.get() {
                view! { <PlanView /> }.into_view()
            } else {
                view! { <EmptyPlan /> }.into_view()
            }
        }}
    }
}

/// Shown when no plan has been generated yet.
#[component]
fn EmptyPlan() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4">
            <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-lg w-full max-w-md text-center p-8">
                <div class="text-5xl mb-4">"🍽️"</div>
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">
                    "No Diet Plan Found"
                </h2>
                <p class="text-gray-600 dark:text-gray-400 mb-6">
                    "You don't have an active diet plan yet. Complete the onboarding \
                     process to generate your personalized plan."
                </p>
                <NavLink
                    href=paths::ONBOARDING
                    class="inline-block w-full px-4 py-3 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white font-medium transition-colors"
                >
                    "Start Onboarding"
                </NavLink>
            </div>
        </div>
    }
}

#[component]
fn PlanView() -> impl IntoView {
    let plan = use_context::<PlanState>().expect("PlanState not found");
    let onboarding = use_context::<OnboardingState>().expect("OnboardingState not found");

    let selected_day = create_rw_signal(0usize);
    let metric = create_rw_signal(ProgressMetric::Weight);

    let day = create_memo(move |_| {
        plan.plan
            .get()
            .and_then(|p| p.days.get(selected_day.get()).cloned())
    });

    // Donut segments from the selected day's macro totals. Percentages are
    // recomputed inside the renderer from these raw gram values.
    let segments = Signal::derive(move || {
        day.get()
            .map(|d| {
                vec![
                    Segment::new("Protein", d.totals.protein as f64, PROTEIN_COLOR),
                    Segment::new("Carbs", d.totals.carbs as f64, CARBS_COLOR),
                    Segment::new("Fats", d.totals.fats as f64, FATS_COLOR),
                ]
            })
            .unwrap_or_default()
    });

    let chart_data = Signal::derive(move || {
        let m = metric.get();
        plan.progress
            .get()
            .iter()
            .map(|entry| TimePoint {
                date: entry.date,
                value: m.value_of(entry),
            })
            .collect::<Vec<_>>()
    });

    let on_regenerate = move |_| {
        let diet_type = onboarding.dietary.get_untracked().diet_type;
        spawn_local(async move {
            plan.regenerate(diet_type).await;
        });
    };

    let on_export = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("PDF export is coming soon.");
        }
    };

    let on_swap = move |slot: MealSlot| {
        let diet_type = onboarding.dietary.get_untracked().diet_type;
        plan.swap_meal(selected_day.get_untracked(), slot, diet_type);
    };

    let range_label = move || {
        plan.plan
            .get()
            .map(|p| {
                format!(
                    "Personalized nutrition plan: {} to {}",
                    p.start_date.format("%Y-%m-%d"),
                    p.end_date.format("%Y-%m-%d"),
                )
            })
            .unwrap_or_default()
    };

    let projected = create_memo(move |_| {
        plan.plan
            .get()
            .map(|p| (p.projected_weight_change, p.projected_weeks))
            .unwrap_or((0.0, 0))
    });

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 pt-24 pb-12 px-4">
            <div class="container mx-auto">
                // Page header with plan actions.
                <div class="flex flex-col lg:flex-row justify-between mb-8 gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                            "Your Diet Plan"
                        </h1>
                        <p class="text-gray-600 dark:text-gray-400">{range_label}</p>
                    </div>
                    <div class="flex space-x-3">
                        <button
                            class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 \
                                   text-gray-700 dark:text-gray-300 hover:bg-gray-100 \
                                   dark:hover:bg-gray-800 transition-colors"
                            on:click=on_export
                        >
                            "Export Plan"
                        </button>
                        <button
                            class="px-4 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 \
                                   text-white font-medium transition-colors disabled:opacity-60"
                            on:click=on_regenerate
                            disabled=move || plan.generating.get()
                        >
                            {move || {
                                if plan.generating.get() { "Regenerating..." } else { "Regenerate Plan" }
                            }}
                        </button>
                    </div>
                </div>

                // Week overview with day selector.
                <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-sm p-6 mb-8">
                    <div class="flex flex-wrap items-center justify-between mb-4">
                        <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                            "Week Overview"
                        </h2>
                        <div class="flex overflow-x-auto py-2 gap-2">
                            {move || {
                                plan.plan
                                    .get()
                                    .map(|p| {
                                        p.days
                                            .iter()
                                            .enumerate()
                                            .map(|(i, d)| {
                                                let date = d.date;
                                                view! {
                                                    <DayButton
                                                        index=i
                                                        weekday=date.format("%a").to_string()
                                                        day_of_month=date.day()
                                                        selected=selected_day
                                                    />
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </div>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-7 gap-4">
                        {move || {
                            let progress = plan.progress.get();
                            plan.plan
                                .get()
                                .map(|p| {
                                    p.days
                                        .iter()
                                        .enumerate()
                                        .map(|(i, d)| {
                                            let adherence = progress
                                                .get(i)
                                                .map(|e| e.adherence)
                                                .unwrap_or(0.0);
                                            let ring = move || {
                                                if i == selected_day.get() {
                                                    "ring-2 ring-emerald-500"
                                                } else {
                                                    ""
                                                }
                                            };
                                            view! {
                                                <div class=move || {
                                                    format!(
                                                        "rounded-lg p-3 bg-gray-50 dark:bg-gray-700 {}",
                                                        ring(),
                                                    )
                                                }>
                                                    <div class="text-center mb-2">
                                                        <div class="text-sm text-gray-500 dark:text-gray-400">
                                                            {d.date.format("%a").to_string()}
                                                        </div>
                                                        <div class="text-lg font-bold text-gray-900 dark:text-white">
                                                            {d.date.day()}
                                                        </div>
                                                    </div>
                                                    <div class="text-center text-sm font-medium mb-2 text-gray-700 dark:text-gray-300">
                                                        {format!("{} kcal", d.totals.calories)}
                                                    </div>
                                                    <ProgressBar value=Signal::derive(move || adherence) />
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    // Meals for the selected day.
                    <div class="lg:col-span-2">
                        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-sm p-6">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                                {move || {
                                    day.get()
                                        .map(|d| {
                                            format!(
                                                "Daily Meals - {}",
                                                d.date.format("%A, %b %-d"),
                                            )
                                        })
                                        .unwrap_or_default()
                                }}
                            </h2>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {move || {
                                    day.get()
                                        .map(|d| {
                                            d.meals
                                                .iter()
                                                .map(|(slot, meal)| {
                                                    let slot = *slot;
                                                    let meal = meal.clone();
                                                    // Built directly because the view! macro
                                                    // parses a `slot` attribute as slot syntax.
                                                    MealCard(
                                                        MealCardProps::builder()
                                                            .meal(Signal::derive(move || meal.clone()))
                                                            .slot(slot)
                                                            .on_swap(on_swap)
                                                            .build(),
                                                    )
                                                })
                                                .collect_view()
                                        })
                                }}
                            </div>
                        </div>
                    </div>

                    <div>
                        // Nutrition summary donut.
                        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-sm p-6 mb-8">
                            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">
                                "Nutrition Summary"
                            </h2>
                            <div class="flex justify-center mb-4">
                                <NutritionDonut
                                    segments=segments
                                    size=220.0
                                    caption="Total Grams"
                                />
                            </div>
                            {move || {
                                day.get()
                                    .map(|d| {
                                        view! {
                                            <div class="grid grid-cols-3 gap-2 text-center">
                                                <SummaryCell label="Calories" value=d.totals.calories />
                                                <SummaryCell label="Protein" value=d.totals.protein />
                                                <SummaryCell label="Carbs" value=d.totals.carbs />
                                            </div>
                                        }
                                    })
                            }}
                        </div>

                        // Progress trend chart.
                        <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-sm p-6">
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-xl font-semibold text-gray-900 dark:text-white">
                                    "Progress"
                                </h2>
                                <div class="flex space-x-2">
                                    <MetricButton metric=ProgressMetric::Weight selected=metric />
                                    <MetricButton metric=ProgressMetric::Calories selected=metric />
                                    <MetricButton metric=ProgressMetric::Adherence selected=metric />
                                </div>
                            </div>

                            <div class="text-center mb-4">
                                <div class="text-sm text-gray-500 dark:text-gray-400">
                                    "Projected Weight Change"
                                </div>
                                <div class="text-2xl font-bold text-gray-900 dark:text-white">
                                    {move || {
                                        let (change, _) = projected.get();
                                        format!(
                                            "{}{} kg",
                                            if change > 0.0 { "+" } else { "" },
                                            change,
                                        )
                                    }}
                                </div>
                                <div class="text-sm text-gray-500 dark:text-gray-400">
                                    {move || format!("over {} weeks", projected.get().1)}
                                </div>
                            </div>

                            <ProgressChart data=chart_data color=CARBS_COLOR.to_string() />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DayButton(
    index: usize,
    weekday: String,
    day_of_month: u32,
    selected: RwSignal<usize>,
) -> impl IntoView {
    let is_active = move || selected.get() == index;

    view! {
        <button
            on:click=move |_| selected.set(index)
            class=move || {
                let base = "min-w-[4.5rem] px-4 py-2 rounded-full flex flex-col items-center \
                            justify-center transition-colors";
                if is_active() {
                    format!("{} bg-emerald-500 text-white", base)
                } else {
                    format!(
                        "{} bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 \
                         dark:hover:bg-gray-600 text-gray-700 dark:text-gray-300",
                        base,
                    )
                }
            }
        >
            <span class="text-xs font-medium">{weekday}</span>
            <span class="text-lg font-bold">{day_of_month}</span>
        </button>
    }
}

#[component]
fn MetricButton(metric: ProgressMetric, selected: RwSignal<ProgressMetric>) -> impl IntoView {
    let is_active = move || selected.get() == metric;

    view! {
        <button
            on:click=move |_| selected.set(metric)
            class=move || {
                let base = "px-3 py-1 rounded-lg text-xs font-medium transition-colors";
                if is_active() {
                    format!("{} bg-emerald-500 text-white", base)
                } else {
                    format!(
                        "{} bg-gray-100 dark:bg-gray-700 text-gray-600 dark:text-gray-300 \
                         hover:bg-gray-200 dark:hover:bg-gray-600",
                        base,
                    )
                }
            }
        >
            {metric.label()}
        </button>
    }
}

#[component]
fn SummaryCell(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div class="bg-gray-50 dark:bg-gray-700 p-3 rounded-lg">
            <div class="text-sm text-gray-500 dark:text-gray-400">{label}</div>
            <div class="text-xl font-bold text-gray-900 dark:text-white">{value}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::state::onboarding::DietType;
    use crate::state::plan::{mock_weekly_plan, swap_meal_in_day, WeeklyPlan};

    // Mirrors the presence guard in DashboardPage: in-place plan edits must
    // not re-render the page shell, or day/metric selection would reset.
    #[test]
    fn test_in_place_plan_edits_keep_the_presence_guard_stable() {
        let runtime = create_runtime();

        let start = "2026-08-01".parse().unwrap();
        let mut rng = || 0.5;
        let plan = create_rw_signal::<Option<WeeklyPlan>>(Some(mock_weekly_plan(
            start,
            DietType::Vegan,
            &mut rng,
        )));
        let has_plan = create_memo(move |_| plan.with(Option::is_some));

        let renders = Rc::new(Cell::new(0));
        let observed = renders.clone();
        create_isomorphic_effect(move |_| {
            has_plan.get();
            observed.set(observed.get() + 1);
        });
        assert_eq!(renders.get(), 1);

        // Swapping a meal on day 4 rewrites the plan signal in place.
        plan.update(|p| {
            let day = p.as_mut().unwrap().days.get_mut(3).unwrap();
            let mut swap_rng = || 0.1;
            swap_meal_in_day(day, MealSlot::Lunch, DietType::Vegan, &mut swap_rng);
        });
        assert_eq!(renders.get(), 1);

        // Regeneration replaces the whole plan but keeps it present.
        plan.update(|p| {
            let mut regen_rng = || 0.9;
            *p = Some(mock_weekly_plan(start, DietType::Vegan, &mut regen_rng));
        });
        assert_eq!(renders.get(), 1);

        // Only losing the plan entirely switches the shell.
        plan.set(None);
        assert_eq!(renders.get(), 2);

        runtime.dispose();
    }
}
