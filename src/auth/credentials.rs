//! Credential stores
//!
//! The menu only talks to the [`CredentialStore`] trait, so the built-in
//! static pairs can be swapped for another backend without touching the
//! session or menu code.

use zeroize::Zeroizing;

use crate::config::{CredentialSettings, Settings};
use crate::error::{InventoryError, InventoryResult};
use crate::models::Role;

/// Something that can check a username/password for a role
pub trait CredentialStore {
    /// Exact, case-sensitive comparison. No lockout and no rate limiting.
    fn verify(&self, username: &str, password: &str, role: Role) -> bool;
}

/// Check credentials, turning a mismatch into an authentication error
pub fn authenticate<S: CredentialStore + ?Sized>(
    store: &S,
    username: &str,
    password: &str,
    role: Role,
) -> InventoryResult<()> {
    if store.verify(username, password, role) {
        Ok(())
    } else {
        Err(InventoryError::Authentication(format!(
            "invalid {} credentials for '{}'",
            role, username
        )))
    }
}

struct Credential {
    username: String,
    password: Zeroizing<String>,
}

impl Credential {
    fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: Zeroizing::new(password.to_string()),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.as_str() == password
    }
}

impl From<&CredentialSettings> for Credential {
    fn from(settings: &CredentialSettings) -> Self {
        Self::new(&settings.username, &settings.password)
    }
}

/// One fixed username/password pair per role
pub struct StaticCredentials {
    admin: Credential,
    staff: Credential,
}

impl StaticCredentials {
    /// Build a store from explicit pairs
    pub fn new(admin: (&str, &str), staff: (&str, &str)) -> Self {
        Self {
            admin: Credential::new(admin.0, admin.1),
            staff: Credential::new(staff.0, staff.1),
        }
    }

    /// Build a store from the settings file (or its defaults)
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            admin: Credential::from(&settings.admin),
            staff: Credential::from(&settings.staff),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl CredentialStore for StaticCredentials {
    fn verify(&self, username: &str, password: &str, role: Role) -> bool {
        match role {
            Role::Administrator => self.admin.matches(username, password),
            Role::Staff => self.staff.matches(username, password),
        }
    }
}
