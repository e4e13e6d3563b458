//! Audit logger for the append-only staff log
//!
//! Each entry is written as a single text line and flushed immediately.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{InventoryError, InventoryResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an action, stamped with the current time
    pub fn append(&self, action: impl Into<String>) -> InventoryResult<()> {
        self.log(&AuditEntry::new(action))
    }

    /// Log an audit entry
    ///
    /// Creates the file if needed. No rotation and no size bound.
    pub fn log(&self, entry: &AuditEntry) -> InventoryResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| InventoryError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", entry.to_line())
            .map_err(|e| InventoryError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| InventoryError::Io(format!("Failed to flush audit log: {}", e)))?;

        debug!(path = %self.log_path.display(), action = %entry.action, "audit entry appended");
        Ok(())
    }

    /// Read the whole log
    ///
    /// Returns `None` when no log file exists yet.
    pub fn read_all(&self) -> InventoryResult<Option<String>> {
        if !self.log_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.log_path)
            .map_err(|e| InventoryError::Io(format!("Failed to read audit log: {}", e)))?;

        Ok(Some(contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("staff_log.txt");
        let logger = AuditLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_empty_log() {
        let (logger, temp) = create_test_logger();

        assert!(!temp.path().join("staff_log.txt").exists());
        assert_eq!(logger.read_all().unwrap(), None);
    }

    #[test]
    fn test_append_and_read() {
        let (logger, _temp) = create_test_logger();

        logger.append("Staff updated stock of Product ID P1 to 3").unwrap();

        let contents = logger.read_all().unwrap().unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" - Staff updated stock of Product ID P1 to 3"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_multiple_entries_append_in_order() {
        let (logger, _temp) = create_test_logger();

        for i in 0..5 {
            logger.append(format!("action {}", i)).unwrap();
        }

        let contents = logger.read_all().unwrap().unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with("action 0"));
        assert!(lines[4].ends_with("action 4"));
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger.append("before restart").unwrap();

        let logger2 = AuditLogger::new(temp.path().join("staff_log.txt"));
        logger2.append("after restart").unwrap();

        let contents = logger2.read_all().unwrap().unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_existing_file_is_not_truncated() {
        let (logger, temp) = create_test_logger();
        fs::write(temp.path().join("staff_log.txt"), "2020-01-01 00:00:00 - old entry\n").unwrap();

        logger.append("new entry").unwrap();

        let contents = logger.read_all().unwrap().unwrap();
        assert!(contents.starts_with("2020-01-01 00:00:00 - old entry\n"));
        assert_eq!(contents.lines().count(), 2);
    }
}
