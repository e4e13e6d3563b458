//! User settings for the inventory tracker
//!
//! Settings are optional: a missing `config.json` means defaults, which
//! reproduce the built-in credentials and a low-stock threshold of 5.

use std::fmt;

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::paths::InventoryPaths;
use crate::error::InventoryError;

/// A username/password pair bound to one role
#[derive(Clone, PartialEq, Eq, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct CredentialSettings {
    pub username: String,
    pub password: String,
}

impl CredentialSettings {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CredentialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Products with a quantity below this are flagged in the admin view
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u64,

    /// Administrator login
    #[serde(default = "default_admin")]
    pub admin: CredentialSettings,

    /// Staff login
    #[serde(default = "default_staff")]
    pub staff: CredentialSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_low_stock_threshold() -> u64 {
    5
}

fn default_admin() -> CredentialSettings {
    CredentialSettings::new("admin", "1234")
}

fn default_staff() -> CredentialSettings {
    CredentialSettings::new("staff", "1111")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            low_stock_threshold: default_low_stock_threshold(),
            admin: default_admin(),
            staff: default_staff(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &InventoryPaths) -> Result<Self, InventoryError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                InventoryError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InventoryError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Defaults are not written back; the file stays optional
            Ok(Settings::default())
        }
    }

}
