//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod footer;
pub mod header;
pub mod link;
pub mod loading;
pub mod meal_card;
pub mod progress_bar;
pub mod stepper;

pub use footer::Footer;
pub use header::Header;
pub use link::NavLink;
pub use loading::{InlineLoading, Loading};
pub use meal_card::MealCard;
pub use progress_bar::ProgressBar;
pub use stepper::Stepper;
