//! Chart Rendering
//!
//! Hand-drawn charts: an SVG macro donut and an animated canvas line chart.
//! Geometry and scaling live in pure functions; the components only wire
//! them to the DOM.

pub mod animation;
pub mod line;
pub mod radial;

pub use line::{ProgressChart, TimePoint};
pub use radial::{NutritionDonut, Segment};
