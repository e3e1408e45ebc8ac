//! Landing Page
//!
//! Marketing page: hero, feature grid, how-it-works, call to action.
//! Anchor links scroll within the page; CTAs route through the resolver.

use leptos::*;

use crate::components::link::NavLink;
use crate::router::paths;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🥗",
        title: "Personalized Plans",
        body: "Weekly meal plans tailored to your diet type, budget, and goals.",
    },
    Feature {
        icon: "📊",
        title: "Macro Tracking",
        body: "See protein, carbs, and fats per day at a glance with clear charts.",
    },
    Feature {
        icon: "🔄",
        title: "Easy Swaps",
        body: "Don't like a meal? Swap it for an alternative in one click.",
    },
    Feature {
        icon: "📈",
        title: "Progress Insights",
        body: "Track weight, calories, and adherence trends over time.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("Tell us about yourself", "Age, activity, and workout habits."),
    ("Set your preferences", "Diet type, allergies, cuisines, and budget."),
    ("Get your plan", "A full week of meals, generated in seconds."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="pt-16">
            // Hero
            <section class="bg-gradient-to-br from-emerald-500 to-emerald-700 text-white">
                <div class="container mx-auto px-4 py-24 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "Your diet, planned for you"
                    </h1>
                    <p class="text-lg md:text-xl text-emerald-100 max-w-2xl mx-auto mb-8">
                        "NutriPlan builds a personalized weekly meal plan around your \
                         goals, preferences, and budget. No spreadsheets, no guesswork."
                    </p>
                    <div class="flex items-center justify-center gap-4">
                        <NavLink
                            href=paths::SIGNUP
                            class="px-6 py-3 rounded-lg bg-white text-emerald-700 font-semibold hover:bg-emerald-50 transition-colors"
                        >
                            "Get Started Free"
                        </NavLink>
                        <a
                            href="#how-it-works"
                            class="px-6 py-3 rounded-lg border border-white/60 font-semibold hover:bg-white/10 transition-colors"
                        >
                            "See How It Works"
                        </a>
                    </div>
                </div>
            </section>

            // Features
            <section id="features" class="py-20 bg-gray-50 dark:bg-gray-900">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center text-gray-900 dark:text-white mb-12">
                        "Everything you need to eat better"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {FEATURES
                            .iter()
                            .map(|f| {
                                view! {
                                    <div class="bg-white dark:bg-gray-800 rounded-xl p-6 shadow-sm">
                                        <div class="text-3xl mb-3">{f.icon}</div>
                                        <h3 class="font-semibold text-gray-900 dark:text-white mb-2">
                                            {f.title}
                                        </h3>
                                        <p class="text-sm text-gray-600 dark:text-gray-400">
                                            {f.body}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // How it works
            <section id="how-it-works" class="py-20 bg-white dark:bg-gray-800">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center text-gray-900 dark:text-white mb-12">
                        "How it works"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, (title, body))| {
                                view! {
                                    <div class="text-center">
                                        <div class="w-12 h-12 rounded-full bg-emerald-500 text-white font-bold text-xl flex items-center justify-center mx-auto mb-4">
                                            {i + 1}
                                        </div>
                                        <h3 class="font-semibold text-gray-900 dark:text-white mb-2">
                                            {*title}
                                        </h3>
                                        <p class="text-sm text-gray-600 dark:text-gray-400">{*body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-16 bg-emerald-600 text-white text-center">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold mb-4">"Ready to start?"</h2>
                    <p class="text-emerald-100 mb-8">
                        "Answer a few questions and get your first weekly plan today."
                    </p>
                    <NavLink
                        href=paths::SIGNUP
                        class="inline-block px-8 py-3 rounded-lg bg-white text-emerald-700 font-semibold hover:bg-emerald-50 transition-colors"
                    >
                        "Create My Plan"
                    </NavLink>
                </div>
            </section>
        </main>
    }
}
