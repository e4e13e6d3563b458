//! Service layer for the inventory tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and persistence after each change.

pub mod inventory;

pub use inventory::{InventoryReport, InventoryService, ProductSummary};
