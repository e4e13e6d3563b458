//! Audit entry data structures
//!
//! An entry is a local timestamp plus free text. On disk each entry is one
//! line: `<timestamp> - <action>`.

use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout used in the log, e.g. `2024-03-01 14:05:09.123456`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// When the action happened (local time)
    pub timestamp: DateTime<Local>,

    /// Human-readable description of the action
    pub action: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current time
    pub fn new(action: impl Into<String>) -> Self {
        Self::at(Local::now(), action)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, action: impl Into<String>) -> Self {
        Self {
            timestamp,
            action: action.into(),
        }
    }

    /// Entry for a staff member changing a product's quantity
    pub fn staff_stock_update(product_id: &str, quantity: u64) -> Self {
        Self::new(format!(
            "Staff updated stock of Product ID {} to {}",
            product_id, quantity
        ))
    }

    /// Format the entry as a log line (without trailing newline)
    pub fn to_line(&self) -> String {
        // Embedded newlines would split one entry across lines
        let action = self.action.replace(['\r', '\n'], " ");
        format!("{} - {}", self.timestamp.format(TIMESTAMP_FORMAT), action)
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_format() {
        let ts = Local.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
        let entry = AuditEntry::at(ts, "did a thing");
        assert_eq!(entry.to_line(), "2024-03-01 14:05:09.000000 - did a thing");
        assert_eq!(entry.to_string(), entry.to_line());
    }

    #[test]
    fn test_staff_stock_update_text() {
        let entry = AuditEntry::staff_stock_update("P1", 3);
        assert_eq!(entry.action, "Staff updated stock of Product ID P1 to 3");
    }

    #[test]
    fn test_newlines_are_flattened() {
        let ts = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let entry = AuditEntry::at(ts, "first\nsecond");
        assert!(!entry.to_line().contains('\n'));
        assert!(entry.to_line().ends_with("first second"));
    }
}
