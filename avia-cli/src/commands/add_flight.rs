//! Add-flight command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use avia::operations::{AddFlightOptions, FlightPlan, PlanExecutor};
use clap::Args;

/// Schedule a flight on a plane with a pilot.
#[derive(Args)]
pub struct AddFlightCommand {
    /// Ticket cost
    #[arg(long, value_name = "COST")]
    pub cost: i64,

    /// Seats already sold
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub seats_sold: i64,

    /// Number of intermediate stops
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    pub stops: i64,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub departure_date: String,

    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub arrival_date: String,

    /// Departure airport code (5 characters)
    #[arg(long = "from", value_name = "AIRPORT")]
    pub departure_airport: String,

    /// Arrival airport code (5 characters)
    #[arg(long = "to", value_name = "AIRPORT")]
    pub arrival_airport: String,

    /// Id of the pilot flying the route
    #[arg(long = "pilot", value_name = "ID")]
    pub pilot_id: i64,

    /// Id of the plane flying the route
    #[arg(long = "plane", value_name = "ID")]
    pub plane_id: i64,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl AddFlightCommand {
    /// Execute the add-flight command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = AddFlightOptions::new(
            self.cost,
            self.seats_sold,
            self.stops,
            self.departure_date,
            self.arrival_date,
            self.departure_airport,
            self.arrival_airport,
            self.pilot_id,
            self.plane_id,
        );

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = FlightPlan::new(options)
            .build_plan(&db)
            .map_err(CliError::from)?;

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
            }
            return Ok(());
        }

        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if let Some(flight_number) = result.entity_id {
            println!("{flight_number}");
        }

        Ok(())
    }
}
