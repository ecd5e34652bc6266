//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddFlightCommand, AddPilotCommand, AddPlaneCommand, AddTechnicianCommand, BookFlightCommand,
    CompletionsCommand, InitCommand, PassengersByStatusCommand, RecordRepairCommand,
    RepairsPerPlaneCommand, RepairsPerYearCommand, SeatsAvailableCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for keeping airline operational records.
#[derive(Parser)]
#[command(name = "avia")]
#[command(version, about = "Manage airline operational records", long_about = None)]
pub struct Cli {
    /// Print extra diagnostics on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Print nothing but record output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Directory holding the database and config file
    #[arg(long, value_name = "PATH", global = true, env = "AVIA_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seconds to wait for the database lock
    #[arg(long, value_name = "SECONDS", global = true, env = "AVIA_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Fail instead of creating a missing database
    #[arg(long, global = true, env = "AVIA_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a plane to the fleet
    AddPlane(AddPlaneCommand),

    /// Add a pilot to the roster
    AddPilot(AddPilotCommand),

    /// Add a maintenance technician
    AddTechnician(AddTechnicianCommand),

    /// Schedule a flight on a plane with a pilot
    AddFlight(AddFlightCommand),

    /// Book a flight for a customer
    BookFlight(BookFlightCommand),

    /// Record a maintenance repair
    RecordRepair(RecordRepairCommand),

    /// Show unsold seats on a flight
    SeatsAvailable(SeatsAvailableCommand),

    /// Report repair counts per plane
    RepairsPerPlane(RepairsPerPlaneCommand),

    /// Report repair counts per calendar year
    RepairsPerYear(RepairsPerYearCommand),

    /// Count reservations on a flight by status
    PassengersByStatus(PassengersByStatusCommand),

    /// Initialize the data directory and database
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
