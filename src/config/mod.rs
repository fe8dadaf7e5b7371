//! Configuration and path management for fincheck

pub mod paths;
pub mod settings;

pub use paths::FincheckPaths;
pub use settings::{Settings, Theme};
