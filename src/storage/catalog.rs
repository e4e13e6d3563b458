//! Catalog repository for JSON storage
//!
//! Loads and saves the whole catalog to inventory.json as a single document.

use std::path::PathBuf;

use tracing::debug;

use crate::error::InventoryError;
use crate::models::Catalog;

use super::file_io::{read_json, write_json};

/// Repository for catalog persistence
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a new catalog store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the catalog; a missing file is an empty catalog
    pub fn load(&self) -> Result<Catalog, InventoryError> {
        let catalog: Catalog = read_json(&self.path)?;
        debug!(path = %self.path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Overwrite the file with the full catalog
    pub fn save(&self, catalog: &Catalog) -> Result<(), InventoryError> {
        write_json(&self.path, catalog)?;
        debug!(path = %self.path.display(), products = catalog.len(), "catalog saved");
        Ok(())
    }
}
