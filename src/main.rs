use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use inventory::auth::StaticCredentials;
use inventory::cli::{Console, MenuController};
use inventory::config::{InventoryPaths, Settings};

#[derive(Parser)]
#[command(
    name = "inventory",
    version,
    about = "Terminal-based inventory tracker",
    long_about = "Track products, stock levels and stock value from the terminal. \
                  Administrators manage the catalog; staff update stock, and every \
                  staff change is recorded in an audit log."
)]
struct Cli {
    /// Directory holding inventory.json, staff_log.txt and config.json
    #[arg(long, global = true, env = "INVENTORY_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    inventory::logging::init();

    let cli = Cli::parse();

    let paths = InventoryPaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Inventory Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Catalog file:   {}", paths.catalog_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Low stock threshold: {}", settings.low_stock_threshold);
            println!("  Admin username:      {}", settings.admin.username);
            println!("  Staff username:      {}", settings.staff.username);
        }
        None => {
            paths.ensure_directories()?;

            let credentials = StaticCredentials::from_settings(&settings);
            let controller = MenuController::new(&credentials, &paths, &settings);

            let stdin = io::stdin();
            let hide_secrets = stdin.is_terminal();
            let mut console =
                Console::new(stdin.lock(), io::stdout().lock()).with_hidden_secrets(hide_secrets);

            controller.run(&mut console)?;
        }
    }

    Ok(())
}
