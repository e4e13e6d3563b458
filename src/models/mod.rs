//! Core data models for the inventory tracker
//!
//! Products, the catalog that holds them, and the roles that act on it.

pub mod catalog;
pub mod product;
pub mod role;

pub use catalog::Catalog;
pub use product::{parse_price, parse_quantity, Product, ProductValidationError};
pub use role::Role;
