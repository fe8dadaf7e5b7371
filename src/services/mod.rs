//! Business logic layer for fincheck
//!
//! Holds the scorer, the pure transform from an input snapshot to the
//! derived summary. Rendering lives in `display`; I/O lives in `cli`.

pub mod scorer;

pub use scorer::Scorer;
