//! Staff capabilities: view the catalog and change stock levels.
//! Every successful stock change is appended to the audit log.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::InventoryResult;
use crate::models::Catalog;
use crate::services::InventoryService;

use super::quantity_from_input;

/// An authenticated staff member
pub struct Staff {
    inventory: InventoryService,
    audit: AuditLogger,
}

impl Staff {
    pub(super) fn new(inventory: InventoryService, audit: AuditLogger) -> Self {
        Self { inventory, audit }
    }

    /// The catalog, for the compact listing
    pub fn view_products(&self) -> &Catalog {
        self.inventory.catalog()
    }

    /// Reject an unknown ID before asking for a quantity
    pub fn require_product(&self, id: &str) -> InventoryResult<()> {
        self.inventory.require_existing(id).map(|_| ())
    }

    /// Set a product's quantity from raw user input and record it
    pub fn update_stock(&mut self, id: &str, quantity: &str) -> InventoryResult<()> {
        self.require_product(id)?;
        let quantity = quantity_from_input(quantity)?;

        self.inventory.update_stock(id, quantity)?;
        self.audit
            .log(&AuditEntry::staff_stock_update(id.trim(), quantity))
    }
}
