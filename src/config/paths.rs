//! Path management for Mes Dépenses
//!
//! ## Path Resolution Order
//!
//! 1. `DEPENSES_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/depenses` on Linux, `%APPDATA%\depenses\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DepensesError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "DEPENSES_DATA_DIR";

/// Manages all paths used by Mes Dépenses
#[derive(Debug, Clone)]
pub struct DepensesPaths {
    /// Base directory for all application data
    base_dir: PathBuf,
}

impl DepensesPaths {
    /// Create a new DepensesPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, DepensesError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DepensesPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one file per persistence slot
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Path of the file backing a named slot
    pub fn slot_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(key)
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), DepensesError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DepensesError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DepensesError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, DepensesError> {
    ProjectDirs::from("", "", "depenses")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DepensesError::Config("Could not determine a home directory".into()))
}
