//! User settings for fincheck
//!
//! Manages the persisted presentation preferences. The theme flag is the
//! only durable state the application keeps; the scorer never reads any of
//! this.

use serde::{Deserialize, Serialize};

use super::paths::FincheckPaths;
use crate::error::FincheckError;

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark terminal theme (default)
    #[default]
    Dark,
    /// Light terminal theme
    Light,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

/// User settings for fincheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// UI theme preference
    #[serde(default)]
    pub theme: Theme,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the category chart includes the savings-contribution slice
    /// alongside true expenses
    #[serde(default = "default_chart_includes_savings")]
    pub chart_includes_savings: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_includes_savings() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            theme: Theme::default(),
            currency_symbol: default_currency(),
            chart_includes_savings: default_chart_includes_savings(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FincheckPaths) -> Result<Self, FincheckError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FincheckError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FincheckError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FincheckPaths) -> Result<(), FincheckError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FincheckError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FincheckError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.chart_includes_savings);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FincheckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.theme = Theme::Light;
        settings.chart_includes_savings = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert!(!loaded.chart_includes_savings);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FincheckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_serde_round_trip_with_missing_fields() {
        let loaded: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.schema_version, 1);

        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"theme\": \"dark\"") || json.contains("\"theme\":\"dark\""));
    }
}
