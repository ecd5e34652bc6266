//! Main entry point for the avia CLI.
//!
//! This is the command-line interface for the avia airline records system.
//! It provides commands for managing operational records:
//! - `add-plane`, `add-pilot`, `add-technician`, `add-flight`: register entities
//! - `book-flight`: book a customer on a flight
//! - `record-repair`: record a maintenance repair
//! - `seats-available`, `repairs-per-plane`, `repairs-per-year`,
//!   `passengers-by-status`: reports

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = avia::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::AddPlane(cmd) => cmd.execute(&global),
        cli::Command::AddPilot(cmd) => cmd.execute(&global),
        cli::Command::AddTechnician(cmd) => cmd.execute(&global),
        cli::Command::AddFlight(cmd) => cmd.execute(&global),
        cli::Command::BookFlight(cmd) => cmd.execute(&global),
        cli::Command::RecordRepair(cmd) => cmd.execute(&global),
        cli::Command::SeatsAvailable(cmd) => cmd.execute(&global),
        cli::Command::RepairsPerPlane(cmd) => cmd.execute(&global),
        cli::Command::RepairsPerYear(cmd) => cmd.execute(&global),
        cli::Command::PassengersByStatus(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
