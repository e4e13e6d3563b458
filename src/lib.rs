//! Inventory tracker - terminal-based stock keeping for a small shop
//!
//! This library provides the core functionality for a single-session
//! inventory tracker. An administrator or a staff member logs in and works
//! on a product catalog kept in a JSON file; staff stock changes are also
//! written to a plain-text audit log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and optional settings
//! - `error`: Custom error types
//! - `models`: Products, the catalog, and roles
//! - `storage`: JSON file storage for the catalog
//! - `audit`: Append-only staff activity log
//! - `auth`: Credential checking
//! - `services`: Catalog validation and mutation
//! - `session`: Role-restricted views of the catalog
//! - `display`: Text formatting for listings and the log
//! - `cli`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory::auth::StaticCredentials;
//! use inventory::cli::{Console, MenuController};
//! use inventory::config::{InventoryPaths, Settings};
//!
//! let paths = InventoryPaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let credentials = StaticCredentials::from_settings(&settings);
//! let controller = MenuController::new(&credentials, &paths, &settings);
//! controller.run(&mut Console::new(stdin.lock(), stdout.lock()))?;
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{InventoryError, InventoryResult};
