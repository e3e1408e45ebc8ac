//! Header Component
//!
//! Fixed top chrome: brand, anchor links, theme toggle, and either auth
//! links or the account menu depending on the session.

use leptos::*;

use crate::components::link::NavLink;
use crate::router::{paths, Router};
use crate::state::session::SessionState;

#[component]
pub fn Header(
    #[prop(into)] dark_mode: Signal<bool>,
    #[prop(into)] on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let session = use_context::<SessionState>().expect("SessionState not found");
    let router = use_context::<Router>().expect("Router not found");

    let authenticated = move || session.user.with(|u| u.is_some());
    let initial = move || {
        session
            .user
            .with(|u| u.as_ref().and_then(|u| u.name.chars().next()).unwrap_or('U'))
            .to_string()
    };

    let on_logout = move |_| {
        session.logout();
        router.navigate(paths::LANDING);
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-gray-900/80 backdrop-blur-md shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex justify-between items-center h-16">
                    <NavLink href=paths::LANDING class="flex items-center gap-2">
                        <div class="w-8 h-8 bg-gradient-to-br from-emerald-400 to-emerald-600 rounded-lg flex items-center justify-center">
                            <span class="text-white font-bold text-lg">"NP"</span>
                        </div>
                        <span class="font-bold text-xl text-gray-800 dark:text-white">
                            "NutriPlan"
                        </span>
                    </NavLink>

                    <nav class="hidden md:flex items-center space-x-6">
                        <a href="#features" class="text-sm font-medium text-gray-700 hover:text-emerald-600 dark:text-gray-200 dark:hover:text-emerald-400">
                            "Features"
                        </a>
                        <a href="#how-it-works" class="text-sm font-medium text-gray-700 hover:text-emerald-600 dark:text-gray-200 dark:hover:text-emerald-400">
                            "How It Works"
                        </a>
                    </nav>

                    <div class="flex items-center space-x-3">
                        <button
                            class="p-2 rounded-full text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800 transition-colors"
                            on:click=move |_| on_toggle_theme.call(())
                            aria-label="Toggle theme"
                        >
                            {move || if dark_mode.get() { "☀" } else { "🌙" }}
                        </button>

                        {move || {
                            if authenticated() {
                                view! {
                                    <div class="flex items-center space-x-3">
                                        <NavLink
                                            href=paths::DASHBOARD
                                            class="text-sm font-medium text-gray-700 hover:text-emerald-600 dark:text-gray-200 dark:hover:text-emerald-400"
                                        >
                                            "Dashboard"
                                        </NavLink>
                                        <div class="w-8 h-8 rounded-full bg-emerald-500 text-white flex items-center justify-center">
                                            {initial()}
                                        </div>
                                        <button
                                            class="text-sm text-gray-500 hover:text-red-600 dark:text-gray-400 transition-colors"
                                            on:click=on_logout.clone()
                                        >
                                            "Log out"
                                        </button>
                                    </div>
                                }
                                    .into_view()
                            } else {
                                view! {
                                    <div class="flex items-center space-x-3">
                                        <NavLink
                                            href=paths::LOGIN
                                            class="text-sm font-medium text-gray-700 hover:text-emerald-600 dark:text-gray-200 dark:hover:text-emerald-400"
                                        >
                                            "Log in"
                                        </NavLink>
                                        <NavLink
                                            href=paths::SIGNUP
                                            class="px-4 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white text-sm font-medium transition-colors"
                                        >
                                            "Sign up"
                                        </NavLink>
                                    </div>
                                }
                                    .into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
