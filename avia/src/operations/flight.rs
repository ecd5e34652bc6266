//! Flight creation planning.
//!
//! This module builds plans that create a flight together with its link
//! row binding a pilot and a plane. The two inserts always travel in the
//! same plan action, so the executor performs them in one transaction and
//! an unlinked flight is never a visible end state.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::parse_date;
use crate::Flight;

use super::plan::{OperationPlan, PlanAction};

/// Options for adding a flight.
///
/// Dates are carried as operator-supplied strings and parsed strictly at
/// plan-build time.
#[derive(Debug, Clone)]
pub struct AddFlightOptions {
    /// The ticket cost.
    pub cost: i64,

    /// The number of seats already sold.
    pub seats_sold: i64,

    /// The number of intermediate stops.
    pub stop_count: i64,

    /// The departure date in `%Y-%m-%d` form.
    pub departure_date: String,

    /// The arrival date in `%Y-%m-%d` form.
    pub arrival_date: String,

    /// The departure airport code (exactly 5 characters).
    pub departure_airport: String,

    /// The arrival airport code (exactly 5 characters).
    pub arrival_airport: String,

    /// The id of the pilot flying the flight.
    pub pilot_id: i64,

    /// The id of the plane operating the flight.
    pub plane_id: i64,
}

impl AddFlightOptions {
    /// Creates options for adding a flight.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::AddFlightOptions;
    ///
    /// let options = AddFlightOptions::new(
    ///     450,
    ///     0,
    ///     1,
    ///     "2024-06-01",
    ///     "2024-06-02",
    ///     "KJFK1",
    ///     "EGLL1",
    ///     3,
    ///     7,
    /// );
    /// assert_eq!(options.pilot_id, 3);
    /// ```
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cost: i64,
        seats_sold: i64,
        stop_count: i64,
        departure_date: impl Into<String>,
        arrival_date: impl Into<String>,
        departure_airport: impl Into<String>,
        arrival_airport: impl Into<String>,
        pilot_id: i64,
        plane_id: i64,
    ) -> Self {
        Self {
            cost,
            seats_sold,
            stop_count,
            departure_date: departure_date.into(),
            arrival_date: arrival_date.into(),
            departure_airport: departure_airport.into(),
            arrival_airport: arrival_airport.into(),
            pilot_id,
            plane_id,
        }
    }
}

/// A flight plan generator.
///
/// This struct validates flight fields, parses both dates, checks that the
/// referenced pilot and plane exist, and generates a one-action plan. It
/// reads the database but never modifies it.
pub struct FlightPlan {
    options: AddFlightOptions,
}

impl FlightPlan {
    /// Creates a new flight plan generator with the given options.
    #[must_use]
    pub const fn new(options: AddFlightOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this flight request.
    ///
    /// Field validation and date parsing run before any database read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any field violates its constraint ([`Error::Validation`])
    /// - Either date fails to parse ([`Error::DateFormat`])
    /// - The pilot or plane does not exist ([`Error::NotFound`])
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avia::operations::{AddFlightOptions, FlightPlan};
    /// use avia::database::{Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
    /// let options = AddFlightOptions::new(
    ///     450, 0, 1, "2024-06-01", "2024-06-02", "KJFK1", "EGLL1", 3, 7,
    /// );
    /// let plan = FlightPlan::new(options).build_plan(&db).unwrap();
    /// ```
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let departure_date = parse_date(&self.options.departure_date)?;
        let arrival_date = parse_date(&self.options.arrival_date)?;
        let flight = Flight::new(
            self.options.cost,
            self.options.seats_sold,
            self.options.stop_count,
            departure_date,
            arrival_date,
            &self.options.departure_airport,
            &self.options.arrival_airport,
        )?;

        let conn = db.connection();
        if !Database::pilot_exists(conn, self.options.pilot_id)? {
            return Err(Error::NotFound {
                resource: format!("pilot {}", self.options.pilot_id),
            });
        }
        if !Database::plane_exists(conn, self.options.plane_id)? {
            return Err(Error::NotFound {
                resource: format!("plane {}", self.options.plane_id),
            });
        }

        let plan = OperationPlan::new(format!(
            "Add flight {} -> {}",
            flight.departure_airport(),
            flight.arrival_airport()
        ))
        .add_action(PlanAction::CreateFlight {
            flight,
            pilot_id: self.options.pilot_id,
            plane_id: self.options.plane_id,
        });

        Ok(plan)
    }
}
