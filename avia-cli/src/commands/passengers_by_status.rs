//! Passengers-by-status command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use avia::operations::reports;
use clap::Args;

/// Count reservations on a flight by status.
#[derive(Args)]
pub struct PassengersByStatusCommand {
    /// Reservation status: W, R, or C
    #[arg(long, value_name = "STATUS")]
    pub status: String,

    /// Flight number
    #[arg(long = "flight", value_name = "NUMBER")]
    pub flight_number: i64,
}

impl PassengersByStatusCommand {
    /// Execute the passengers-by-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let count = reports::passengers_by_status(&db, &self.status, self.flight_number)
            .map_err(CliError::from)?;
        println!("{count}");

        Ok(())
    }
}
