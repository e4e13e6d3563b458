//! Audit logging for the inventory tracker
//!
//! Staff stock changes are recorded in an append-only text log that the
//! administrator can read back in bulk.
//!
//! # Architecture
//!
//! - `AuditEntry`: a timestamp and an action description, rendered as one
//!   `<timestamp> - <action>` line.
//! - `AuditLogger`: appends entries to the log file and reads it back.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::staff_stock_update("P1", 3))?;
//!
//! match logger.read_all()? {
//!     Some(text) => print!("{}", text),
//!     None => println!("No staff activity found."),
//! }
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, TIMESTAMP_FORMAT};
pub use logger::AuditLogger;
