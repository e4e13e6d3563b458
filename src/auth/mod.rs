//! Authentication
//!
//! Credential checking behind a small trait, with a static in-memory
//! implementation fed from settings.

pub mod credentials;

pub use credentials::{authenticate, CredentialStore, StaticCredentials};
