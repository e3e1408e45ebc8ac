//! NutriPlan
//!
//! Diet-planning dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing landing page with auth forms
//! - Multi-step onboarding wizard
//! - Mock weekly meal plan with macro and progress charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory except one serialized session
//! record in local storage; navigation is resolved client-side from the
//! session flags and mirrored into the browser history.

use leptos::*;

mod app;
mod charts;
mod components;
mod pages;
mod router;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
