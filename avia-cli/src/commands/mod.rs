//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add-plane`: Register a plane
//! - `add-pilot`: Register a pilot
//! - `add-technician`: Register a technician
//! - `add-flight`: Create a flight with its crew link
//! - `book-flight`: Book a customer on a flight
//! - `record-repair`: Record a maintenance repair
//! - `seats-available`: Show unsold seats on a flight
//! - `repairs-per-plane`: Report repair counts per plane
//! - `repairs-per-year`: Report repair counts per year
//! - `passengers-by-status`: Count reservations by status
//! - `init`: Initialize the data directory and database
//! - `completions`: Generate shell completion scripts

pub mod add_flight;
pub mod add_pilot;
pub mod add_plane;
pub mod add_technician;
pub mod book_flight;
pub mod completions;
pub mod init;
pub mod passengers_by_status;
pub mod record_repair;
pub mod repairs_per_plane;
pub mod repairs_per_year;
pub mod seats_available;

pub use add_flight::AddFlightCommand;
pub use add_pilot::AddPilotCommand;
pub use add_plane::AddPlaneCommand;
pub use add_technician::AddTechnicianCommand;
pub use book_flight::BookFlightCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use passengers_by_status::PassengersByStatusCommand;
pub use record_repair::RecordRepairCommand;
pub use repairs_per_plane::RepairsPerPlaneCommand;
pub use repairs_per_year::RepairsPerYearCommand;
pub use seats_available::SeatsAvailableCommand;
