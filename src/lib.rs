//! fincheck - Terminal-based personal finance health score calculator
//!
//! This library provides the core functionality for the fincheck CLI. It
//! turns a flat snapshot of labeled income and expense fields into a 0-100
//! financial health score with qualitative feedback, following the
//! 50/30/20 budgeting heuristic.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, field map, snapshots, summaries)
//! - `services`: The scorer
//! - `display`: Terminal rendering of scoring results
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use fincheck::models::Snapshot;
//! use fincheck::services::Scorer;
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.set("inc-salary", 60000.0);
//! snapshot.set("freq-salary", 12.0);
//!
//! let summary = Scorer::score(&snapshot);
//! assert_eq!(summary.net_income.cents(), 500000);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::FincheckError;
