//! Theme CLI command
//!
//! Shows or persists the UI theme preference, the one piece of state that
//! survives between runs.

use crate::config::{FincheckPaths, Settings, Theme};
use crate::error::FincheckResult;

/// Handle the theme command
pub fn handle_theme_command(
    paths: &FincheckPaths,
    mut settings: Settings,
    theme: Option<Theme>,
) -> FincheckResult<()> {
    match theme {
        None => {
            println!("Current theme: {}", settings.theme);
        }
        Some(theme) => {
            settings.theme = theme;
            settings.save(paths)?;
            println!("Theme set to {}", theme);
        }
    }
    Ok(())
}
