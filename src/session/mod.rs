//! Authenticated sessions
//!
//! A [`Session`] is either an [`Administrator`] or a [`Staff`] member. Both
//! wrap the same [`InventoryService`] but each exposes only the operations
//! its role is allowed, so an unpermitted call does not type-check.
//!
//! The catalog is loaded once when the session opens.

mod admin;
mod staff;

pub use admin::Administrator;
pub use staff::Staff;

use tracing::{info, warn};

use crate::audit::AuditLogger;
use crate::auth::{authenticate, CredentialStore};
use crate::config::{InventoryPaths, Settings};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{parse_price, parse_quantity, Role};
use crate::services::InventoryService;
use crate::storage::CatalogStore;

/// A logged-in user and the catalog they operate on
pub enum Session {
    Administrator(Administrator),
    Staff(Staff),
}

impl Session {
    /// Authenticate and load the catalog for `role`
    pub fn open<S: CredentialStore + ?Sized>(
        credentials: &S,
        role: Role,
        username: &str,
        password: &str,
        paths: &InventoryPaths,
        settings: &Settings,
    ) -> InventoryResult<Self> {
        if let Err(e) = authenticate(credentials, username, password, role) {
            warn!(%role, username, "authentication rejected");
            return Err(e);
        }
        info!(%role, username, "authenticated");

        let inventory = InventoryService::load(
            CatalogStore::new(paths.catalog_file()),
            settings.low_stock_threshold,
        )?;
        let audit = AuditLogger::new(paths.audit_log());

        Ok(match role {
            Role::Administrator => Self::Administrator(Administrator::new(inventory, audit)),
            Role::Staff => Self::Staff(Staff::new(inventory, audit)),
        })
    }

}

fn quantity_from_input(input: &str) -> InventoryResult<u64> {
    parse_quantity(input).map_err(|e| InventoryError::Validation(e.to_string()))
}

fn price_from_input(input: &str) -> InventoryResult<f64> {
    parse_price(input).map_err(|e| InventoryError::Validation(e.to_string()))
}
