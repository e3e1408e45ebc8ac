//! Loading Component
//!
//! Spinners for the startup session check and in-flight mock calls.

use leptos::*;

/// Full-page loading spinner, shown while the persisted session is being
/// restored and no routing decisions may be made yet.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
            <div class="w-16 h-16 border-t-4 border-emerald-500 border-solid rounded-full animate-spin" />
        </div>
    }
}

/// Inline spinner for buttons.
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block w-4 h-4 border-t-2 border-current border-solid rounded-full animate-spin" />
    }
}
