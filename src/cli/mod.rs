//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the scoring and display layers.

pub mod fields;
pub mod sample;
pub mod score;
pub mod theme;

pub use fields::handle_fields_command;
pub use sample::handle_sample_command;
pub use score::{handle_score_command, ScoreArgs};
pub use theme::handle_theme_command;
