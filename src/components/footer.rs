//! Footer Component

use leptos::*;

use crate::components::link::NavLink;
use crate::router::paths;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400 py-10">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <div class="flex items-center gap-2">
                        <div class="w-8 h-8 bg-gradient-to-br from-emerald-400 to-emerald-600 rounded-lg flex items-center justify-center">
                            <span class="text-white font-bold text-lg">"NP"</span>
                        </div>
                        <span class="font-bold text-white">"NutriPlan"</span>
                    </div>

                    <nav class="flex items-center space-x-6 text-sm">
                        <a href="#features" class="hover:text-white transition-colors">"Features"</a>
                        <a href="#how-it-works" class="hover:text-white transition-colors">"How It Works"</a>
                        <NavLink href=paths::SIGNUP class="hover:text-white transition-colors">
                            "Get Started"
                        </NavLink>
                    </nav>

                    <p class="text-xs">"© 2026 NutriPlan. Eat well, live well."</p>
                </div>
            </div>
        </footer>
    }
}
