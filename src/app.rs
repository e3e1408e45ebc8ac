//! App Root Component
//!
//! Wires the state stores, restores the persisted session, runs the
//! navigation resolver on every session/path edge, and dispatches the
//! resolved screen.

use leptos::*;

use crate::components::{Footer, Header, Loading};
use crate::pages::{AuthMode, AuthPage, DashboardPage, LandingPage, OnboardingPage};
use crate::router::{provide_router, resolve_path, screen_for, Router, Screen};
use crate::state::{
    provide_onboarding_state, provide_plan_state, provide_session_state, SessionState,
};
use crate::storage;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_session_state();
    provide_onboarding_state();
    provide_plan_state();
    provide_router();

    let session = use_context::<SessionState>().expect("SessionState not found");
    let router = use_context::<Router>().expect("Router not found");

    // One-time check of the persisted credentials.
    create_effect(move |done: Option<bool>| {
        if done.unwrap_or(false) {
            return true;
        }
        session.restore();
        true
    });

    // Navigation resolver: re-evaluated on every session or path change.
    // Suspended while the session restore is in flight.
    let resolver_router = router.clone();
    create_effect(move |_| {
        if session.loading.get() {
            return;
        }
        let snapshot = session.snapshot();
        let current = resolver_router.path.get();
        if let Some(target) = resolve_path(snapshot, &current) {
            resolver_router.navigate(target);
        }
    });

    // Theme handling, persisted separately from the session record. With
    // nothing stored yet, the OS color-scheme preference decides.
    let dark_mode = create_rw_signal(initial_dark(
        storage::load_theme().as_deref(),
        system_prefers_dark(),
    ));
    create_effect(move |_| {
        apply_theme(dark_mode.get());
    });
    let on_toggle_theme = move |()| {
        let next = !dark_mode.get_untracked();
        dark_mode.set(next);
        storage::save_theme(if next { "dark" } else { "light" });
    };

    let screen_router = router;
    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            {move || {
                if session.loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let screen = screen_for(session.snapshot(), &screen_router.path.get());
                let body = match screen {
                    Screen::Landing => view! { <LandingPage /> }.into_view(),
                    Screen::Login => view! { <AuthPage mode=AuthMode::Login /> }.into_view(),
                    Screen::Signup => view! { <AuthPage mode=AuthMode::Signup /> }.into_view(),
                    Screen::Onboarding => view! { <OnboardingPage /> }.into_view(),
                    Screen::Dashboard => view! { <DashboardPage /> }.into_view(),
                };

                if screen.has_chrome() {
                    view! {
                        <Header dark_mode=dark_mode on_toggle_theme=on_toggle_theme />
                        {body}
                        <Footer />
                    }
                        .into_view()
                } else {
                    body
                }
            }}
        </div>
    }
}

/// A stored theme choice wins; otherwise follow the system preference.
fn initial_dark(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some(theme) => theme == "dark",
        None => system_dark,
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Mirror the theme flag onto the document element class list.
fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let result = if dark {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if result.is_err() {
        web_sys::console::error_1(&"failed to toggle theme class".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_theme_wins_over_system_preference() {
        assert!(initial_dark(Some("dark"), false));
        assert!(!initial_dark(Some("light"), true));
    }

    #[test]
    fn test_system_preference_fills_in_when_nothing_stored() {
        assert!(initial_dark(None, true));
        assert!(!initial_dark(None, false));
    }
}
