//! Navigation Link
//!
//! Anchor that routes through the resolver instead of reloading the page.
//! Hash fragments are left to the browser for same-page scrolling.

use leptos::*;

use crate::router::Router;

/// In-app link. Pushes a history entry and lets the resolver pick the
/// screen; plain `#anchor` hrefs fall through to default behavior.
#[component]
pub fn NavLink(
    href: &'static str,
    #[prop(into, default = String::new())] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_context::<Router>().expect("Router not found");

    let on_click = move |ev: ev::MouseEvent| {
        if href.starts_with('/') {
            ev.prevent_default();
            router.navigate(href);
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
