//! Interactive menu
//!
//! This module contains the terminal front end: prompting, menu parsing,
//! and the controller that ties a login to the role's command loop.

pub mod console;
pub mod controller;
pub mod menu;

pub use console::Console;
pub use controller::{MenuController, SessionEnd};
pub use menu::{AdminCommand, StaffCommand};
