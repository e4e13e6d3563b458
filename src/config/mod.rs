//! Configuration module for the inventory tracker
//!
//! This module provides configuration management including:
//! - Data directory and file path resolution
//! - Optional settings (credentials, low-stock threshold)

pub mod paths;
pub mod settings;

pub use paths::InventoryPaths;
pub use settings::{CredentialSettings, Settings};
