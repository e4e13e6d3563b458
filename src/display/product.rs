//! Product display formatting
//!
//! The administrator gets one block per product plus totals and low-stock
//! alerts; staff get a single line per product.

use crate::models::Catalog;
use crate::services::InventoryReport;

use super::format_number;

const EMPTY_MESSAGE: &str = "Inventory is empty!";
const HEADER: &str = "--- Product List ---";
const SEPARATOR: &str = "-------------------------";

/// Format the administrator's detailed listing
pub fn format_admin_report(report: &InventoryReport) -> String {
    if report.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", HEADER));

    for summary in &report.products {
        output.push_str(&format!("\nProduct ID: {}\n", summary.id));
        output.push_str(&format!("Name: {}\n", summary.product.name));
        output.push_str(&format!("Quantity: {}\n", summary.product.quantity));
        output.push_str(&format!("Price: {}\n", format_number(summary.product.price)));
        output.push_str(&format!("Total Value: {}\n", format_number(summary.value)));
        output.push_str(SEPARATOR);
        output.push('\n');

        if summary.low_stock {
            output.push_str("Low Stock Alert!\n");
        }
    }

    output.push_str(&format!(
        "\nTotal Inventory Value: {}\n",
        format_number(report.total_value)
    ));

    output
}

/// Format the staff member's compact listing
pub fn format_staff_listing(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut output = format!("\n{}\n", HEADER);
    for (id, product) in catalog.iter() {
        output.push_str(&format!(
            "{} | {} | Qty: {} | Price: {}\n",
            id,
            product.name,
            product.quantity,
            format_number(product.price)
        ));
    }

    output
}
