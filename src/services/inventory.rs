//! Inventory service
//!
//! Business logic over the in-memory catalog: validation, mutation, and the
//! full-file save that follows every successful change. The catalog is read
//! once when the service is created and never reloaded.

use tracing::info;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{Catalog, Product, ProductValidationError};
use crate::storage::CatalogStore;

/// One product as shown in a listing, with computed fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: String,
    pub product: Product,
    /// quantity x price
    pub value: f64,
    /// Quantity is below the configured threshold
    pub low_stock: bool,
}

/// Every product in catalog order plus the accumulated value
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryReport {
    pub products: Vec<ProductSummary>,
    pub total_value: f64,
}

impl InventoryReport {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Service for catalog management
pub struct InventoryService {
    store: CatalogStore,
    catalog: Catalog,
    low_stock_threshold: u64,
}

impl InventoryService {
    /// Load the catalog from `store`
    pub fn load(store: CatalogStore, low_stock_threshold: u64) -> InventoryResult<Self> {
        let catalog = store.load()?;
        Ok(Self {
            store,
            catalog,
            low_stock_threshold,
        })
    }

    /// The in-memory catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Check that `id` can be used for a new product
    ///
    /// Returns the trimmed ID.
    pub fn check_new_id<'a>(&self, id: &'a str) -> InventoryResult<&'a str> {
        let id = id.trim();
        if id.is_empty() {
            return Err(InventoryError::Validation(
                ProductValidationError::EmptyId.to_string(),
            ));
        }

        if self.catalog.contains(id) {
            return Err(InventoryError::duplicate_product(id));
        }

        Ok(id)
    }

    /// Check that a product exists, returning the trimmed ID
    pub fn require_existing<'a>(&self, id: &'a str) -> InventoryResult<&'a str> {
        let id = id.trim();
        if self.catalog.contains(id) {
            Ok(id)
        } else {
            Err(InventoryError::product_not_found(id))
        }
    }

    /// Add a new product and persist the catalog
    pub fn add_product(&mut self, id: &str, product: Product) -> InventoryResult<()> {
        let id = self.check_new_id(id)?.to_string();

        let product = Product {
            name: product.name.trim().to_string(),
            ..product
        };
        product
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        info!(product_id = %id, name = %product.name, quantity = product.quantity, price = product.price, "adding product");
        self.catalog.insert(id, product);
        self.store.save(&self.catalog)
    }

    /// Remove a product and persist the catalog
    pub fn delete_product(&mut self, id: &str) -> InventoryResult<Product> {
        let id = self.require_existing(id)?;
        let removed = self
            .catalog
            .remove(id)
            .ok_or_else(|| InventoryError::product_not_found(id))?;

        info!(product_id = %id, "deleted product");
        self.store.save(&self.catalog)?;
        Ok(removed)
    }

    /// Set a product's quantity and persist the catalog
    ///
    /// Returns the previous quantity.
    pub fn update_stock(&mut self, id: &str, quantity: u64) -> InventoryResult<u64> {
        let id = self.require_existing(id)?;
        let product = self
            .catalog
            .get_mut(id)
            .ok_or_else(|| InventoryError::product_not_found(id))?;

        let previous = std::mem::replace(&mut product.quantity, quantity);

        info!(product_id = %id, from = previous, to = quantity, "updated stock");
        self.store.save(&self.catalog)?;
        Ok(previous)
    }

    /// Summarize every product in catalog order
    pub fn report(&self) -> InventoryReport {
        let products: Vec<ProductSummary> = self
            .catalog
            .iter()
            .map(|(id, product)| ProductSummary {
                id: id.to_string(),
                product: product.clone(),
                value: product.value(),
                low_stock: product.is_low_stock(self.low_stock_threshold),
            })
            .collect();

        let total_value = products.iter().map(|s| s.value).sum();

        InventoryReport {
            products,
            total_value,
        }
    }
}
