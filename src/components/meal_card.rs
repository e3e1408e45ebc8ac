//! Meal Card Component
//!
//! One meal slot on the dashboard: name, macro breakdown, swap action.

use leptos::*;

use crate::state::plan::{Meal, MealSlot};

#[component]
pub fn MealCard(
    #[prop(into)] meal: Signal<Meal>,
    slot: MealSlot,
    #[prop(into)] on_swap: Callback<MealSlot>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-sm overflow-hidden">
            <div class="p-4">
                <div class="flex items-center justify-between mb-2">
                    <span class="text-xs font-semibold uppercase tracking-wide text-emerald-600 dark:text-emerald-400">
                        {slot.label()}
                    </span>
                    <button
                        class="text-xs text-gray-500 hover:text-emerald-600 dark:text-gray-400 dark:hover:text-emerald-400 transition-colors"
                        on:click=move |_| on_swap.call(slot)
                    >
                        "Swap"
                    </button>
                </div>

                <h3 class="font-semibold text-gray-900 dark:text-white">
                    {move || meal.get().name}
                </h3>
                <p class="text-sm text-gray-500 dark:text-gray-400 mt-1">
                    {move || meal.get().description}
                </p>

                <div class="mt-3 flex items-center justify-between text-sm">
                    <span class="font-medium">
                        {move || format!("{} kcal", meal.get().calories)}
                    </span>
                    <span class="text-gray-500 dark:text-gray-400">
                        {move || {
                            let m = meal.get();
                            format!("P {}g / C {}g / F {}g", m.protein, m.carbs, m.fats)
                        }}
                    </span>
                </div>

                <div class="mt-2 text-xs text-gray-400 dark:text-gray-500">
                    {move || format!("{} min prep", meal.get().preparation_minutes)}
                </div>
            </div>
        </div>
    }
}
