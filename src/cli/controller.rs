//! Menu controller
//!
//! Runs one session: role selection, a single login attempt, then the
//! role's command loop until Exit or end of input. Validation and
//! not-found errors are printed and the menu is shown again; any other
//! error ends the session and is returned to the caller.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::auth::CredentialStore;
use crate::config::{InventoryPaths, Settings};
use crate::display::{format_admin_report, format_audit_log, format_staff_listing};
use crate::error::{InventoryError, InventoryResult};
use crate::models::Role;
use crate::session::{Administrator, Session, Staff};

use super::console::Console;
use super::menu::{AdminCommand, StaffCommand, ROLE_MENU};

const CHOICE_PROMPT: &str = "Enter choice: ";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit
    Exited,
    /// Login was rejected
    AuthenticationFailed,
    /// Input ran out
    EndOfInput,
}

enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Drives the interactive menu
pub struct MenuController<'a, S: CredentialStore + ?Sized> {
    credentials: &'a S,
    paths: &'a InventoryPaths,
    settings: &'a Settings,
}

impl<'a, S: CredentialStore + ?Sized> MenuController<'a, S> {
    pub fn new(credentials: &'a S, paths: &'a InventoryPaths, settings: &'a Settings) -> Self {
        Self {
            credentials,
            paths,
            settings,
        }
    }

    /// Run a full session against `console`
    pub fn run<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> InventoryResult<SessionEnd> {
        console.writeln(ROLE_MENU)?;

        let Some(choice) = console.prompt(CHOICE_PROMPT)? else {
            return Ok(SessionEnd::EndOfInput);
        };
        let Some(username) = console.prompt("Enter username: ")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        let Some(password) = console.prompt_secret("Enter password: ")? else {
            return Ok(SessionEnd::EndOfInput);
        };

        // An unknown role choice is treated like bad credentials
        let Some(role) = Role::from_selection(&choice) else {
            debug!(choice = %choice, "unknown role selection");
            console.writeln("Authentication Failed!")?;
            return Ok(SessionEnd::AuthenticationFailed);
        };

        let session = match Session::open(
            self.credentials,
            role,
            &username,
            &password,
            self.paths,
            self.settings,
        ) {
            Ok(session) => session,
            Err(InventoryError::Authentication(_)) => {
                console.writeln("Authentication Failed!")?;
                return Ok(SessionEnd::AuthenticationFailed);
            }
            Err(e) => return Err(e),
        };

        match session {
            Session::Administrator(mut admin) => admin_loop(&mut admin, console),
            Session::Staff(mut staff) => staff_loop(&mut staff, console),
        }
    }
}

fn admin_loop<R: BufRead, W: Write>(
    admin: &mut Administrator,
    console: &mut Console<R, W>,
) -> InventoryResult<SessionEnd> {
    loop {
        console.write(&AdminCommand::menu())?;
        let Some(choice) = console.prompt(CHOICE_PROMPT)? else {
            return Ok(SessionEnd::EndOfInput);
        };

        let result = match AdminCommand::parse(&choice) {
            Some(AdminCommand::AddProduct) => add_product(admin, console),
            Some(AdminCommand::ViewProducts) => {
                console.write(&format_admin_report(&admin.view_products()))?;
                Ok(Flow::Continue)
            }
            Some(AdminCommand::UpdateStock) => admin_update_stock(admin, console),
            Some(AdminCommand::DeleteProduct) => delete_product(admin, console),
            Some(AdminCommand::ViewAuditLog) => {
                let log = admin.view_audit_log()?;
                console.write(&format_audit_log(log.as_deref()))?;
                Ok(Flow::Continue)
            }
            Some(AdminCommand::Exit) => Ok(Flow::Exit),
            None => {
                console.writeln("Invalid choice!")?;
                Ok(Flow::Continue)
            }
        };

        if let Some(end) = settle(result, console)? {
            return Ok(end);
        }
    }
}

fn staff_loop<R: BufRead, W: Write>(
    staff: &mut Staff,
    console: &mut Console<R, W>,
) -> InventoryResult<SessionEnd> {
    loop {
        console.write(&StaffCommand::menu())?;
        let Some(choice) = console.prompt(CHOICE_PROMPT)? else {
            return Ok(SessionEnd::EndOfInput);
        };

        let result = match StaffCommand::parse(&choice) {
            Some(StaffCommand::ViewProducts) => {
                console.write(&format_staff_listing(staff.view_products()))?;
                Ok(Flow::Continue)
            }
            Some(StaffCommand::UpdateStock) => staff_update_stock(staff, console),
            Some(StaffCommand::Exit) => Ok(Flow::Exit),
            None => {
                console.writeln("Invalid choice!")?;
                Ok(Flow::Continue)
            }
        };

        if let Some(end) = settle(result, console)? {
            return Ok(end);
        }
    }
}

/// Report recoverable errors and decide whether the loop goes on
fn settle<R: BufRead, W: Write>(
    result: InventoryResult<Flow>,
    console: &mut Console<R, W>,
) -> InventoryResult<Option<SessionEnd>> {
    match result {
        Ok(Flow::Continue) => Ok(None),
        Ok(Flow::Exit) => Ok(Some(SessionEnd::Exited)),
        Ok(Flow::EndOfInput) => Ok(Some(SessionEnd::EndOfInput)),
        Err(e) if e.is_recoverable() => {
            console.writeln(&e.to_string())?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn add_product<R: BufRead, W: Write>(
    admin: &mut Administrator,
    console: &mut Console<R, W>,
) -> InventoryResult<Flow> {
    let Some(id) = console.prompt("Enter Product ID: ")? else {
        return Ok(Flow::EndOfInput);
    };
    admin.check_new_id(&id)?;

    let Some(name) = console.prompt("Enter Product Name: ")? else {
        return Ok(Flow::EndOfInput);
    };
    let Some(quantity) = console.prompt("Enter Quantity: ")? else {
        return Ok(Flow::EndOfInput);
    };
    let Some(price) = console.prompt("Enter Price: ")? else {
        return Ok(Flow::EndOfInput);
    };

    admin.add_product(&id, &name, &quantity, &price)?;
    console.writeln("Product Added Successfully!")?;
    Ok(Flow::Continue)
}

fn admin_update_stock<R: BufRead, W: Write>(
    admin: &mut Administrator,
    console: &mut Console<R, W>,
) -> InventoryResult<Flow> {
    let Some(id) = console.prompt("Enter Product ID to update: ")? else {
        return Ok(Flow::EndOfInput);
    };
    admin.require_product(&id)?;

    let Some(quantity) = console.prompt("Enter new quantity: ")? else {
        return Ok(Flow::EndOfInput);
    };

    admin.update_stock(&id, &quantity)?;
    console.writeln("Stock Updated!")?;
    Ok(Flow::Continue)
}

fn staff_update_stock<R: BufRead, W: Write>(
    staff: &mut Staff,
    console: &mut Console<R, W>,
) -> InventoryResult<Flow> {
    let Some(id) = console.prompt("Enter Product ID to update: ")? else {
        return Ok(Flow::EndOfInput);
    };
    staff.require_product(&id)?;

    let Some(quantity) = console.prompt("Enter new quantity: ")? else {
        return Ok(Flow::EndOfInput);
    };

    staff.update_stock(&id, &quantity)?;
    console.writeln("Stock Updated!")?;
    Ok(Flow::Continue)
}

fn delete_product<R: BufRead, W: Write>(
    admin: &mut Administrator,
    console: &mut Console<R, W>,
) -> InventoryResult<Flow> {
    let Some(id) = console.prompt("Enter Product ID to delete: ")? else {
        return Ok(Flow::EndOfInput);
    };

    admin.delete_product(&id)?;
    console.writeln("Product Deleted Successfully!")?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use crate::storage::CatalogStore;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(temp: &TempDir, input: &str) -> (SessionEnd, String) {
        let paths = InventoryPaths::with_base_dir(temp.path());
        let settings = Settings::default();
        let credentials = StaticCredentials::default();
        let controller = MenuController::new(&credentials, &paths, &settings);

        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let end = controller.run(&mut console).unwrap();
        let output = String::from_utf8(console.into_writer()).unwrap();
        (end, output)
    }

    fn catalog(temp: &TempDir) -> crate::models::Catalog {
        CatalogStore::new(temp.path().join("inventory.json"))
            .load()
            .unwrap()
    }

    #[test]
    fn test_admin_gets_six_commands() {
        let temp = TempDir::new().unwrap();
        let (end, output) = run_session(&temp, "1\nadmin\n1234\n6\n");

        assert_eq!(end, SessionEnd::Exited);
        assert!(output.contains("5. View Staff Logs\n6. Exit\n"));
        assert!(!output.contains("Authentication Failed!"));
    }

    #[test]
    fn test_staff_gets_three_commands() {
        let temp = TempDir::new().unwrap();
        let (end, output) = run_session(&temp, "2\nstaff\n1111\n3\n");

        assert_eq!(end, SessionEnd::Exited);
        assert!(output.contains("\n1. View Products\n2. Update Stock\n3. Exit\n"));
        assert!(!output.contains("Add Product"));
    }

    #[test]
    fn test_wrong_credentials_end_session() {
        for input in [
            "1\nadmin\nwrong\n6\n",
            "2\nstaff\nwrong\n3\n",
            "2\nadmin\n1234\n3\n",
            "9\nadmin\n1234\n",
        ] {
            let temp = TempDir::new().unwrap();
            let (end, output) = run_session(&temp, input);

            assert_eq!(end, SessionEnd::AuthenticationFailed);
            assert!(output.ends_with("Authentication Failed!\n"));
            assert!(!output.contains("Exit"));
        }
    }

    #[test]
    fn test_pen_scenario() {
        let temp = TempDir::new().unwrap();
        let input = "1\nadmin\n1234\n\
                     1\nP1\nPen\n10\n2.5\n\
                     2\n\
                     3\nP1\n3\n\
                     2\n\
                     4\nP1\n\
                     2\n\
                     6\n";

        let (end, output) = run_session(&temp, input);

        assert_eq!(end, SessionEnd::Exited);
        assert!(output.contains("Product Added Successfully!"));
        assert!(output.contains("Total Value: 25.0\n"));
        assert!(output.contains("Total Inventory Value: 25.0\n"));
        assert!(output.contains("Quantity: 3\nPrice: 2.5\nTotal Value: 7.5\n"));
        assert_eq!(output.matches("Low Stock Alert!").count(), 1);
        assert!(output.contains("Product Deleted Successfully!"));
        assert!(output.contains("Inventory is empty!"));
        assert!(catalog(&temp).is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected_before_more_prompts() {
        let temp = TempDir::new().unwrap();
        let input = "1\nadmin\n1234\n\
                     1\nP1\nPen\n10\n2.5\n\
                     1\nP1\n\
                     6\n";

        let (end, output) = run_session(&temp, input);

        assert_eq!(end, SessionEnd::Exited);
        assert!(output.contains("Product already exists: P1"));
        assert_eq!(output.matches("Enter Product Name: ").count(), 1);
        assert_eq!(catalog(&temp).get("P1").unwrap().name, "Pen");
    }

    #[test]
    fn test_bad_input_keeps_looping() {
        let temp = TempDir::new().unwrap();
        let input = "1\nadmin\n1234\n\
                     1\n\n\
                     1\nP1\nPen\nten\n2.5\n\
                     1\nP1\nPen\n-1\n2.5\n\
                     3\nP9\n\
                     4\nP9\n\
                     banana\n\
                     6\n";

        let (end, output) = run_session(&temp, input);

        assert_eq!(end, SessionEnd::Exited);
        assert!(output.contains("Product ID cannot be empty"));
        assert!(output.contains("Quantity must be an integer"));
        assert!(output.contains("Quantity cannot be negative"));
        assert_eq!(output.matches("Product not found: P9").count(), 2);
        assert!(output.contains("Invalid choice!"));
        assert!(!temp.path().join("inventory.json").exists());
    }

    #[test]
    fn test_staff_update_is_audited_and_visible_to_admin() {
        let temp = TempDir::new().unwrap();
        run_session(&temp, "1\nadmin\n1234\n1\nP1\nPen\n10\n2.5\n3\nP1\n8\n6\n");
        assert!(!temp.path().join("staff_log.txt").exists());

        let (_, output) = run_session(&temp, "2\nstaff\n1111\n2\nP1\n4\n2\nP2\n1\n3\n");
        assert!(output.contains("Stock Updated!"));
        assert!(output.contains("Product not found: P2"));

        let (_, output) = run_session(&temp, "1\nadmin\n1234\n5\n6\n");
        assert!(output.contains("--- Staff Activity Log ---"));
        assert_eq!(output.matches("Staff updated stock of Product ID").count(), 1);
        assert!(output.contains("Product ID P1 to 4"));
    }

    #[test]
    fn test_admin_sees_no_staff_activity() {
        let temp = TempDir::new().unwrap();
        let (_, output) = run_session(&temp, "1\nadmin\n1234\n5\n6\n");
        assert!(output.contains("No staff activity found."));
    }

    #[test]
    fn test_staff_listing() {
        let temp = TempDir::new().unwrap();
        run_session(&temp, "1\nadmin\n1234\n1\nP1\nPen\n2\n2.5\n6\n");

        let (_, output) = run_session(&temp, "2\nstaff\n1111\n1\n3\n");
        assert!(output.contains("P1 | Pen | Qty: 2 | Price: 2.5\n"));
        assert!(!output.contains("Low Stock Alert!"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let temp = TempDir::new().unwrap();

        let (end, _) = run_session(&temp, "");
        assert_eq!(end, SessionEnd::EndOfInput);

        let (end, _) = run_session(&temp, "1\nadmin\n1234\n");
        assert_eq!(end, SessionEnd::EndOfInput);

        let (end, _) = run_session(&temp, "1\nadmin\n1234\n1\nP1\nPen\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(catalog(&temp).is_empty());
    }
}
