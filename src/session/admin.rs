//! Administrator capabilities
//!
//! View, add, update, delete, and read the staff audit log. Administrator
//! changes are not written to the audit log.

use crate::audit::AuditLogger;
use crate::error::InventoryResult;
use crate::models::Product;
use crate::services::{InventoryReport, InventoryService};

use super::{price_from_input, quantity_from_input};

/// An authenticated administrator
pub struct Administrator {
    inventory: InventoryService,
    audit: AuditLogger,
}

impl Administrator {
    pub(super) fn new(inventory: InventoryService, audit: AuditLogger) -> Self {
        Self { inventory, audit }
    }

    /// Full listing with per-product value, low-stock flags and total value
    pub fn view_products(&self) -> InventoryReport {
        self.inventory.report()
    }

    /// Reject an empty or already-used ID before asking for the rest
    pub fn check_new_id(&self, id: &str) -> InventoryResult<()> {
        self.inventory.check_new_id(id).map(|_| ())
    }

    /// Reject an unknown ID before asking for a quantity
    pub fn require_product(&self, id: &str) -> InventoryResult<()> {
        self.inventory.require_existing(id).map(|_| ())
    }

    /// Add a product from raw user input
    pub fn add_product(
        &mut self,
        id: &str,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> InventoryResult<()> {
        self.check_new_id(id)?;
        let quantity = quantity_from_input(quantity)?;
        let price = price_from_input(price)?;

        self.inventory
            .add_product(id, Product::new(name, quantity, price))
    }

    /// Set a product's quantity from raw user input
    pub fn update_stock(&mut self, id: &str, quantity: &str) -> InventoryResult<()> {
        self.require_product(id)?;
        let quantity = quantity_from_input(quantity)?;

        self.inventory.update_stock(id, quantity).map(|_| ())
    }

    /// Remove a product
    pub fn delete_product(&mut self, id: &str) -> InventoryResult<Product> {
        self.inventory.delete_product(id)
    }

    /// Full staff log, or `None` if nothing has been logged yet
    pub fn view_audit_log(&self) -> InventoryResult<Option<String>> {
        self.audit.read_all()
    }
}
