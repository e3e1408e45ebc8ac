//! Onboarding Page
//!
//! Three-step wizard collecting the profile used for plan generation.
//! Finishing the last step marks the session complete, kicks off mock plan
//! generation, and routes to the dashboard.

use leptos::*;

use crate::components::stepper::Stepper;
use crate::router::{paths, Router};
use crate::state::onboarding::{
    ActivityStatus, BudgetRange, DietType, HealthGoal, OnboardingState, WorkoutIntensity,
};
use crate::state::plan::PlanState;
use crate::state::session::SessionState;

const STEP_LABELS: [&str; 3] = ["Personal Information", "Dietary Preferences", "Health Goals"];

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let onboarding = use_context::<OnboardingState>().expect("OnboardingState not found");
    let session = use_context::<SessionState>().expect("SessionState not found");
    let plan = use_context::<PlanState>().expect("PlanState not found");
    let router = use_context::<Router>().expect("Router not found");

    let finish = move || {
        session.complete_onboarding();
        let diet_type = onboarding.dietary.get_untracked().diet_type;
        let router = router.clone();
        spawn_local(async move {
            plan.generate(diet_type).await;
            router.navigate(paths::DASHBOARD);
        });
    };

    let on_next = move |_| {
        if onboarding.advance() {
            finish();
        }
    };
    let on_back = move |_| onboarding.back();

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 py-12 px-4">
            <div class="container mx-auto max-w-3xl">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                        "Let's Personalize Your Diet Plan"
                    </h1>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">
                        "We'll create a custom nutrition plan based on your needs and preferences"
                    </p>
                </div>

                <div class="bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-6 md:p-8">
                    <Stepper
                        steps=STEP_LABELS.to_vec()
                        current=onboarding.step
                        on_step_click=move |step| onboarding.go_to(step)
                    />

                    <div class="min-h-[400px]">
                        {move || match onboarding.step.get() {
                            1 => view! { <PersonalInfoForm /> }.into_view(),
                            2 => view! { <DietaryPreferencesForm /> }.into_view(),
                            _ => view! { <HealthInfoForm /> }.into_view(),
                        }}
                    </div>

                    <div class="flex justify-between mt-8">
                        <button
                            class="px-6 py-2 rounded-lg border border-gray-300 dark:border-gray-600 \
                                   text-gray-700 dark:text-gray-300 hover:bg-gray-100 \
                                   dark:hover:bg-gray-700 transition-colors disabled:opacity-50"
                            on:click=on_back
                            disabled=move || onboarding.step.get() == 1
                        >
                            "Back"
                        </button>
                        <button
                            class="px-6 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 \
                                   text-white font-medium transition-colors"
                            on:click=on_next
                            disabled=move || plan.generating.get()
                        >
                            {move || {
                                if plan.generating.get() {
                                    "Generating your plan..."
                                } else if onboarding.step.get() == 3 {
                                    "Generate My Plan"
                                } else {
                                    "Continue"
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PersonalInfoForm() -> impl IntoView {
    let onboarding = use_context::<OnboardingState>().expect("OnboardingState not found");
    let personal = onboarding.personal;

    view! {
        <div class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    "Full Name"
                </label>
                <input
                    type="text"
                    class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                    prop:value=move || personal.get().full_name
                    on:input=move |ev| {
                        personal.update(|p| p.full_name = event_target_value(&ev));
                    }
                />
            </div>

            <div class="grid grid-cols-3 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Age"
                    </label>
                    <input
                        type="number"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || personal.get().age.to_string()
                        on:input=move |ev| {
                            let age = event_target_value(&ev).parse().unwrap_or(0);
                            personal.update(|p| p.age = age);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Height (cm)"
                    </label>
                    <input
                        type="number"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || personal.get().height_cm.to_string()
                        on:input=move |ev| {
                            let height = event_target_value(&ev).parse().unwrap_or(0.0);
                            personal.update(|p| p.height_cm = height);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Weight (kg)"
                    </label>
                    <input
                        type="number"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || personal.get().weight_kg.to_string()
                        on:input=move |ev| {
                            let weight = event_target_value(&ev).parse().unwrap_or(0.0);
                            personal.update(|p| p.weight_kg = weight);
                        }
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    "Activity Status"
                </label>
                <select
                    class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                    on:change=move |ev| {
                        let status = match event_target_value(&ev).as_str() {
                            "student" => ActivityStatus::Student,
                            "working" => ActivityStatus::WorkingProfessional,
                            "homemaker" => ActivityStatus::Homemaker,
                            "retired" => ActivityStatus::Retired,
                            _ => ActivityStatus::Other,
                        };
                        personal.update(|p| p.activity = status);
                    }
                >
                    <option value="student">"Student"</option>
                    <option value="working">"Working Professional"</option>
                    <option value="homemaker">"Homemaker"</option>
                    <option value="retired">"Retired"</option>
                    <option value="other" selected=true>"Other"</option>
                </select>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Workout (min/day)"
                    </label>
                    <input
                        type="number"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || personal.get().workout_minutes.to_string()
                        on:input=move |ev| {
                            let minutes = event_target_value(&ev).parse().unwrap_or(0);
                            personal.update(|p| p.workout_minutes = minutes);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Intensity"
                    </label>
                    <select
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        on:change=move |ev| {
                            let intensity = match event_target_value(&ev).as_str() {
                                "moderate" => WorkoutIntensity::Moderate,
                                "high" => WorkoutIntensity::High,
                                _ => WorkoutIntensity::Low,
                            };
                            personal.update(|p| p.intensity = intensity);
                        }
                    >
                        <option value="low" selected=true>"Low"</option>
                        <option value="moderate">"Moderate"</option>
                        <option value="high">"High"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DietaryPreferencesForm() -> impl IntoView {
    let onboarding = use_context::<OnboardingState>().expect("OnboardingState not found");
    let dietary = onboarding.dietary;

    let diet_options = [
        ("vegetarian", DietType::Vegetarian),
        ("non-vegetarian", DietType::NonVegetarian),
        ("semi-vegetarian", DietType::SemiVegetarian),
        ("vegan", DietType::Vegan),
    ];

    view! {
        <div class="space-y-6">
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                    "Diet Type"
                </label>
                <div class="grid grid-cols-2 gap-3">
                    {diet_options
                        .into_iter()
                        .map(|(_, diet)| {
                            let selected =
                                move || dietary.with(|d| d.diet_type == diet);
                            view! {
                                <button
                                    class=move || {
                                        format!(
                                            "px-4 py-3 rounded-lg border text-sm font-medium transition-colors {}",
                                            if selected() {
                                                "border-emerald-500 bg-emerald-50 dark:bg-emerald-900/30 text-emerald-700 dark:text-emerald-300"
                                            } else {
                                                "border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:border-emerald-300"
                                            },
                                        )
                                    }
                                    on:click=move |_| dietary.update(|d| d.diet_type = diet)
                                >
                                    {diet.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    "Allergies (comma separated)"
                </label>
                <input
                    type="text"
                    placeholder="e.g. peanuts, shellfish"
                    class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                    on:input=move |ev| {
                        let allergies = event_target_value(&ev)
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect();
                        dietary.update(|d| d.allergies = allergies);
                    }
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Budget"
                    </label>
                    <select
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        on:change=move |ev| {
                            let budget = match event_target_value(&ev).as_str() {
                                "low" => BudgetRange::Low,
                                "high" => BudgetRange::High,
                                _ => BudgetRange::Medium,
                            };
                            dietary.update(|d| d.budget = budget);
                        }
                    >
                        <option value="low">"Low"</option>
                        <option value="medium" selected=true>"Medium"</option>
                        <option value="high">"High"</option>
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Meals per day"
                    </label>
                    <input
                        type="number"
                        min="2"
                        max="6"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || dietary.get().meals_per_day.to_string()
                        on:input=move |ev| {
                            let meals = event_target_value(&ev).parse().unwrap_or(3);
                            dietary.update(|d| d.meals_per_day = meals);
                        }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn HealthInfoForm() -> impl IntoView {
    let onboarding = use_context::<OnboardingState>().expect("OnboardingState not found");
    let health = onboarding.health;

    let goal_options = [
        ("Weight Loss", HealthGoal::WeightLoss),
        ("Muscle Gain", HealthGoal::MuscleGain),
        ("Maintenance", HealthGoal::Maintenance),
    ];

    view! {
        <div class="space-y-6">
            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                    "Health Goals"
                </label>
                <div class="grid grid-cols-3 gap-3">
                    {goal_options
                        .into_iter()
                        .map(|(label, goal)| {
                            let selected = move || health.with(|h| h.goals.contains(&goal));
                            view! {
                                <button
                                    class=move || {
                                        format!(
                                            "px-4 py-3 rounded-lg border text-sm font-medium transition-colors {}",
                                            if selected() {
                                                "border-emerald-500 bg-emerald-50 dark:bg-emerald-900/30 text-emerald-700 dark:text-emerald-300"
                                            } else {
                                                "border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:border-emerald-300"
                                            },
                                        )
                                    }
                                    on:click=move |_| {
                                        health.update(|h| {
                                            if let Some(pos) =
                                                h.goals.iter().position(|g| *g == goal)
                                            {
                                                h.goals.remove(pos);
                                            } else {
                                                h.goals.push(goal);
                                            }
                                        });
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Bedtime"
                    </label>
                    <input
                        type="time"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || health.get().bedtime
                        on:input=move |ev| {
                            health.update(|h| h.bedtime = event_target_value(&ev));
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Wake-up time"
                    </label>
                    <input
                        type="time"
                        class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                        prop:value=move || health.get().wakeup_time
                        on:input=move |ev| {
                            health.update(|h| h.wakeup_time = event_target_value(&ev));
                        }
                    />
                </div>
            </div>

            <div>
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    "Medical conditions (comma separated)"
                </label>
                <input
                    type="text"
                    placeholder="e.g. diabetes"
                    class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                    on:input=move |ev| {
                        let conditions = event_target_value(&ev)
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect();
                        health.update(|h| h.conditions = conditions);
                    }
                />
            </div>
        </div>
    }
}
