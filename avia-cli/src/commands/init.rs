//! The `init` subcommand.
//!
//! Sets the data directory up deliberately instead of relying on the
//! auto-creation that other commands perform on first use.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use avia::database::default_data_dir;
use avia::operations::init::{init_database, InitOptions};
use clap::Args;
use std::path::{Path, PathBuf};

/// Initialize avia data directory and database.
#[derive(Args)]
#[command(about = "Initialize avia data directory and database")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Overwrite existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    /// Runs `init` against the resolved data directory.
    ///
    /// `--data-dir` here names where to CREATE, not where to find, and
    /// `--disable-autoinit` is deliberately not honored: the whole
    /// point of the command is to create things.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Subcommand flag wins over the global flag wins over ~/.avia
        let data_dir = self
            .data_dir
            .clone()
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not resolve a data directory (no home directory)".to_string(),
                )
            })?;

        if self.dry_run {
            self.preview(&data_dir);
            return Ok(());
        }

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        let result = init_database(&options).map_err(CliError::from)?;

        println!("Initialized avia in: {}", result.data_dir.display());
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_created {
            let verb = if self.overwrite { "Recreated" } else { "Created" };
            println!("  - {verb} database");
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Existing configuration file kept (not overwritten)");
        }

        Ok(())
    }

    /// Prints what a real run would do, without touching the disk.
    fn preview(&self, data_dir: &Path) {
        println!("Dry-run mode: nothing will be written");
        println!();
        println!("Would initialize avia in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory is already present: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        let db_path = data_dir.join("avia.db");
        match (db_path.exists(), self.overwrite) {
            (false, _) => println!("  - Create database: {}", db_path.display()),
            (true, true) => {
                println!("  - Remove existing database: {}", db_path.display());
                println!("  - Create replacement database: {}", db_path.display());
            }
            (true, false) => println!(
                "  - ERROR: Database already exists (pass --overwrite to replace): {}",
                db_path.display()
            ),
        }

        if self.with_config {
            let config_path = data_dir.join("config.yaml");
            if config_path.exists() {
                println!(
                    "  - Keep existing configuration file: {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }
}
