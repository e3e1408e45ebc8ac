//! Pages
//!
//! Top-level page components, one per resolved screen.

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod onboarding;

pub use auth::{AuthMode, AuthPage};
pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use onboarding::OnboardingPage;
