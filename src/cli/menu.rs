//! Menu commands for each role
//!
//! Commands are chosen by number; the numbering is part of the user-facing
//! interface and must stay stable.

/// Role selection shown before login
pub const ROLE_MENU: &str = "Who are you?\n1. Admin\n2. Staff";

/// Administrator menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminCommand {
    AddProduct,
    ViewProducts,
    UpdateStock,
    DeleteProduct,
    ViewAuditLog,
    Exit,
}

impl AdminCommand {
    pub const ALL: [AdminCommand; 6] = [
        Self::AddProduct,
        Self::ViewProducts,
        Self::UpdateStock,
        Self::DeleteProduct,
        Self::ViewAuditLog,
        Self::Exit,
    ];

    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::AddProduct),
            "2" => Some(Self::ViewProducts),
            "3" => Some(Self::UpdateStock),
            "4" => Some(Self::DeleteProduct),
            "5" => Some(Self::ViewAuditLog),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddProduct => "Add Product",
            Self::ViewProducts => "View Products",
            Self::UpdateStock => "Update Stock",
            Self::DeleteProduct => "Delete Product",
            Self::ViewAuditLog => "View Staff Logs",
            Self::Exit => "Exit",
        }
    }

    /// The numbered menu text
    pub fn menu() -> String {
        numbered(Self::ALL.iter().map(|c| c.label()))
    }
}

/// Staff menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffCommand {
    ViewProducts,
    UpdateStock,
    Exit,
}

impl StaffCommand {
    pub const ALL: [StaffCommand; 3] = [Self::ViewProducts, Self::UpdateStock, Self::Exit];

    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::ViewProducts),
            "2" => Some(Self::UpdateStock),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewProducts => "View Products",
            Self::UpdateStock => "Update Stock",
            Self::Exit => "Exit",
        }
    }

    /// The numbered menu text
    pub fn menu() -> String {
        numbered(Self::ALL.iter().map(|c| c.label()))
    }
}

fn numbered<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let mut output = String::from("\n");
    for (i, label) in labels.enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, label));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_numbers_match_menu() {
        for (i, command) in AdminCommand::ALL.iter().enumerate() {
            assert_eq!(AdminCommand::parse(&(i + 1).to_string()), Some(*command));
        }
        assert_eq!(AdminCommand::parse("7"), None);
        assert_eq!(AdminCommand::parse(""), None);
    }

    #[test]
    fn test_staff_numbers_match_menu() {
        for (i, command) in StaffCommand::ALL.iter().enumerate() {
            assert_eq!(StaffCommand::parse(&(i + 1).to_string()), Some(*command));
        }
        assert_eq!(StaffCommand::parse("4"), None);
    }

    #[test]
    fn test_menu_text() {
        assert_eq!(
            AdminCommand::menu(),
            "\n1. Add Product\n2. View Products\n3. Update Stock\n4. Delete Product\n5. View Staff Logs\n6. Exit\n"
        );
        assert_eq!(
            StaffCommand::menu(),
            "\n1. View Products\n2. Update Stock\n3. Exit\n"
        );
    }
}
