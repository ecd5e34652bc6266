//! Book-flight command implementation.
//!
//! This module implements the `book-flight` command, which books a
//! flight for a customer. When the customer or flight does not exist
//! yet, their attributes can be supplied on the command line and the
//! missing records are created in the same transaction.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_status, GlobalOptions};
use avia::operations::{
    AddFlightOptions, BookFlightOptions, BookingPlan, NewCustomerOptions, PlanExecutor,
};
use clap::Args;

/// Book a flight for a customer.
#[derive(Args)]
pub struct BookFlightCommand {
    /// Customer id
    #[arg(long = "customer", value_name = "ID")]
    pub customer_id: i64,

    /// Flight number
    #[arg(long = "flight", value_name = "NUMBER")]
    pub flight_number: i64,

    /// Reservation status: W, R, or C (default from configuration)
    #[arg(long, value_name = "STATUS", env = "AVIA_DEFAULT_STATUS")]
    pub status: Option<String>,

    /// First name for a customer created by this booking
    #[arg(long, value_name = "NAME", help_heading = "New customer")]
    pub first_name: Option<String>,

    /// Last name for a customer created by this booking
    #[arg(long, value_name = "NAME", help_heading = "New customer")]
    pub last_name: Option<String>,

    /// Gender code for a customer created by this booking
    #[arg(long = "gender", value_name = "CODE", help_heading = "New customer")]
    pub gender_code: Option<String>,

    /// Date of birth (YYYY-MM-DD) for a customer created by this booking
    #[arg(long = "birth-date", value_name = "DATE", help_heading = "New customer")]
    pub date_of_birth: Option<String>,

    /// Street address for a customer created by this booking
    #[arg(long, value_name = "ADDRESS", help_heading = "New customer")]
    pub address: Option<String>,

    /// Phone number for a customer created by this booking
    #[arg(long, value_name = "PHONE", help_heading = "New customer")]
    pub phone: Option<String>,

    /// Postal code for a customer created by this booking
    #[arg(long, value_name = "ZIP", help_heading = "New customer")]
    pub zip: Option<String>,

    /// Ticket cost for a flight created by this booking
    #[arg(long, value_name = "COST", help_heading = "New flight")]
    pub cost: Option<i64>,

    /// Seats already sold for a flight created by this booking
    #[arg(long, value_name = "COUNT", help_heading = "New flight")]
    pub seats_sold: Option<i64>,

    /// Intermediate stops for a flight created by this booking
    #[arg(long, value_name = "COUNT", help_heading = "New flight")]
    pub stops: Option<i64>,

    /// Departure date (YYYY-MM-DD) for a flight created by this booking
    #[arg(long, value_name = "DATE", help_heading = "New flight")]
    pub departure_date: Option<String>,

    /// Arrival date (YYYY-MM-DD) for a flight created by this booking
    #[arg(long, value_name = "DATE", help_heading = "New flight")]
    pub arrival_date: Option<String>,

    /// Departure airport code for a flight created by this booking
    #[arg(long = "from", value_name = "AIRPORT", help_heading = "New flight")]
    pub departure_airport: Option<String>,

    /// Arrival airport code for a flight created by this booking
    #[arg(long = "to", value_name = "AIRPORT", help_heading = "New flight")]
    pub arrival_airport: Option<String>,

    /// Pilot id for a flight created by this booking
    #[arg(long = "pilot", value_name = "ID", help_heading = "New flight")]
    pub pilot_id: Option<i64>,

    /// Plane id for a flight created by this booking
    #[arg(long = "plane", value_name = "ID", help_heading = "New flight")]
    pub plane_id: Option<i64>,

    /// Preview the plan without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl BookFlightCommand {
    /// Execute the book-flight command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let status = match &self.status {
            Some(letter) => parse_status(letter)?,
            None => config.default_status,
        };

        let new_customer = self.new_customer_options()?;
        let new_flight = self.new_flight_options()?;

        let options = BookFlightOptions::new(self.customer_id, self.flight_number, status)
            .with_new_customer(new_customer)
            .with_new_flight(new_flight);

        let mut db = open_database(global, &config)?;
        let plan = BookingPlan::new(options)
            .build_plan(&db)
            .map_err(CliError::from)?;

        let mut executor = PlanExecutor::new(&mut db);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan).map_err(CliError::from)?;

        // Final status on stdout, warnings on stderr
        if let Some(status) = result.status {
            println!("{status}");
        }
        if !global.quiet {
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        Ok(())
    }

    /// Collects the new-customer attributes, if any were given.
    ///
    /// All attributes must be supplied together; a partial set is an
    /// argument error rather than a half-described customer.
    fn new_customer_options(&self) -> Result<Option<NewCustomerOptions>, CliError> {
        let fields = [
            ("--first-name", self.first_name.as_ref()),
            ("--last-name", self.last_name.as_ref()),
            ("--gender", self.gender_code.as_ref()),
            ("--birth-date", self.date_of_birth.as_ref()),
            ("--address", self.address.as_ref()),
            ("--phone", self.phone.as_ref()),
            ("--zip", self.zip.as_ref()),
        ];

        if fields.iter().all(|(_, value)| value.is_none()) {
            return Ok(None);
        }
        if let Some((flag, _)) = fields.iter().find(|(_, value)| value.is_none()) {
            return Err(CliError::InvalidArguments(format!(
                "{flag} is required when creating a customer as part of a booking"
            )));
        }

        Ok(Some(NewCustomerOptions::new(
            self.first_name.clone().unwrap_or_default(),
            self.last_name.clone().unwrap_or_default(),
            self.gender_code.clone().unwrap_or_default(),
            self.date_of_birth.clone().unwrap_or_default(),
            self.address.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.zip.clone().unwrap_or_default(),
        )))
    }

    /// Collects the new-flight attributes, if any were given.
    fn new_flight_options(&self) -> Result<Option<AddFlightOptions>, CliError> {
        let any_given = self.cost.is_some()
            || self.seats_sold.is_some()
            || self.stops.is_some()
            || self.departure_date.is_some()
            || self.arrival_date.is_some()
            || self.departure_airport.is_some()
            || self.arrival_airport.is_some()
            || self.pilot_id.is_some()
            || self.plane_id.is_some();
        if !any_given {
            return Ok(None);
        }

        let required = |flag: &str, present: bool| {
            if present {
                Ok(())
            } else {
                Err(CliError::InvalidArguments(format!(
                    "{flag} is required when creating a flight as part of a booking"
                )))
            }
        };
        required("--cost", self.cost.is_some())?;
        required("--departure-date", self.departure_date.is_some())?;
        required("--arrival-date", self.arrival_date.is_some())?;
        required("--from", self.departure_airport.is_some())?;
        required("--to", self.arrival_airport.is_some())?;
        required("--pilot", self.pilot_id.is_some())?;
        required("--plane", self.plane_id.is_some())?;

        Ok(Some(AddFlightOptions::new(
            self.cost.unwrap_or_default(),
            self.seats_sold.unwrap_or(0),
            self.stops.unwrap_or(0),
            self.departure_date.clone().unwrap_or_default(),
            self.arrival_date.clone().unwrap_or_default(),
            self.departure_airport.clone().unwrap_or_default(),
            self.arrival_airport.clone().unwrap_or_default(),
            self.pilot_id.unwrap_or_default(),
            self.plane_id.unwrap_or_default(),
        )))
    }
}
