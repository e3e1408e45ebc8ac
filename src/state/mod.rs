//! State Management
//!
//! Application state stores backed by Leptos signals, each mutated only
//! through its own named transition functions.

pub mod onboarding;
pub mod plan;
pub mod session;

pub use onboarding::{provide_onboarding_state, OnboardingState};
pub use plan::{provide_plan_state, PlanState};
pub use session::{provide_session_state, SessionState, UserRecord};
