//! Login roles

use std::fmt;

/// Who is logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Staff,
}

impl Role {
    /// Map the role-selection answer (`1` or `2`) to a role
    pub fn from_selection(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Administrator),
            "2" => Some(Self::Staff),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Administrator => write!(f, "admin"),
            Self::Staff => write!(f, "staff"),
        }
    }
}
