//! Seats-available command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use avia::operations::reports;
use clap::Args;

/// Show unsold seats on a flight.
#[derive(Args)]
pub struct SeatsAvailableCommand {
    /// Flight number
    #[arg(long = "flight", value_name = "NUMBER")]
    pub flight_number: i64,

    /// Travel date (YYYY-MM-DD)
    #[arg(long = "date", value_name = "DATE")]
    pub date: String,
}

impl SeatsAvailableCommand {
    /// Execute the seats-available command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let seats = reports::seats_available(&db, self.flight_number, &self.date)
            .map_err(CliError::from)?;
        println!("{seats}");

        Ok(())
    }
}
