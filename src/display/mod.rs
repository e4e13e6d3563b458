//! Display formatting for terminal output
//!
//! Turns reports, catalogs and the audit log into the text the menu prints.

pub mod audit;
pub mod product;

pub use audit::format_audit_log;
pub use product::{format_admin_report, format_staff_listing};

/// Format a price or value
///
/// Whole numbers keep one decimal place (`25.0`); everything else uses the
/// shortest representation that round-trips (`7.5`, `0.1`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
