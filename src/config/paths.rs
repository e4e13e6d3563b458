//! Path management for the inventory tracker
//!
//! All files live in a single data directory. The directory comes from
//! `--data-dir` / `INVENTORY_CLI_DATA_DIR` when given, otherwise the current
//! working directory is used.

use std::path::{Path, PathBuf};

use crate::error::InventoryError;

/// Manages all paths used by the inventory tracker
#[derive(Debug, Clone)]
pub struct InventoryPaths {
    /// Directory holding the catalog, audit log and settings
    base_dir: PathBuf,
}

impl InventoryPaths {
    /// Resolve paths from an optional explicit directory
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the current working
    /// directory cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, InventoryError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                InventoryError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create InventoryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the persisted catalog
    pub fn catalog_file(&self) -> PathBuf {
        self.base_dir.join("inventory.json")
    }

    /// Get the path to the staff audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("staff_log.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), InventoryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InventoryError::Io(format!("Failed to create data directory: {}", e)))
    }
}
