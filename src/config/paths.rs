//! Path management for fincheck
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FINCHECK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/fincheck` on Linux,
//!    `~/Library/Application Support/fincheck` on macOS, `%APPDATA%` on
//!    Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FincheckError;

/// Manages all paths used by fincheck
#[derive(Debug, Clone)]
pub struct FincheckPaths {
    /// Base directory for all fincheck data
    base_dir: PathBuf,
}

impl FincheckPaths {
    /// Create a new FincheckPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FincheckError> {
        let base_dir = if let Ok(custom) = std::env::var("FINCHECK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "fincheck").ok_or_else(|| {
                FincheckError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FincheckPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FincheckError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FincheckError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }

    /// Check if fincheck has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
