//! Audit log display formatting

/// Format the staff activity log for printing
pub fn format_audit_log(contents: Option<&str>) -> String {
    match contents {
        Some(text) => {
            let mut output = String::from("\n--- Staff Activity Log ---\n");
            output.push_str(text);
            if !text.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        None => "No staff activity found.\n".to_string(),
    }
}
