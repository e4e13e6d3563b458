//! Storage layer for the inventory tracker
//!
//! The catalog is persisted as one JSON document that is rewritten in full
//! after every change.

pub mod catalog;
pub mod file_io;

pub use catalog::CatalogStore;
pub use file_io::{read_json, write_json};
