//! Terminal rendering for scoring results
//!
//! Consumes a [`crate::models::Summary`] and produces plain-text output:
//! the color-coded score gauge, the needs/wants/savings allocation bar,
//! the tips list, and the category chart. Nothing in here computes.

pub mod breakdown;
pub mod gauge;
pub mod report;
pub mod summary;

pub use breakdown::{render_allocation_bar, render_category_chart};
pub use gauge::{render_gauge, GaugeColor};
pub use summary::render_summary;
