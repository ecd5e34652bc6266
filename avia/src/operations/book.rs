//! Booking workflow planning.
//!
//! This module implements the reservation workflow over the
//! (customer, flight) natural key. A booking request either updates the
//! status of an existing reservation or creates a new one, provisioning
//! the missing customer or flight in the same plan when the caller
//! supplies their attributes. All emitted actions run in one transaction,
//! so a failed booking leaves no dangling customer or flight behind.

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::parse_date;
use crate::{Customer, Flight, ReservationStatus};

use super::flight::AddFlightOptions;
use super::plan::{OperationPlan, PlanAction};

/// Attributes for a customer created as part of a booking.
///
/// The customer id is not carried here: the booking's `customer_id` is
/// used, so the created record always matches the requested key.
#[derive(Debug, Clone)]
pub struct NewCustomerOptions {
    /// The customer's first name.
    pub first_name: String,

    /// The customer's last name.
    pub last_name: String,

    /// The single-character gender code.
    pub gender_code: String,

    /// The date of birth in `%Y-%m-%d` form.
    pub date_of_birth: String,

    /// The street address.
    pub address: String,

    /// The phone number.
    pub phone: String,

    /// The postal code.
    pub zip: String,
}

impl NewCustomerOptions {
    /// Creates attributes for a customer created as part of a booking.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender_code: impl Into<String>,
        date_of_birth: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender_code: gender_code.into(),
            date_of_birth: date_of_birth.into(),
            address: address.into(),
            phone: phone.into(),
            zip: zip.into(),
        }
    }
}

/// Options for a booking operation.
#[derive(Debug, Clone)]
pub struct BookFlightOptions {
    /// The booking customer's id.
    pub customer_id: i64,

    /// The requested flight number.
    pub flight_number: i64,

    /// The status to store.
    pub status: ReservationStatus,

    /// Attributes for creating the customer if it does not exist.
    pub new_customer: Option<NewCustomerOptions>,

    /// Attributes for creating the flight if it does not exist.
    pub new_flight: Option<AddFlightOptions>,
}

impl BookFlightOptions {
    /// Creates options for a booking operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use avia::operations::BookFlightOptions;
    /// use avia::ReservationStatus;
    ///
    /// let options = BookFlightOptions::new(7, 3, ReservationStatus::Reserved);
    /// assert!(options.new_customer.is_none());
    /// ```
    #[must_use]
    pub const fn new(customer_id: i64, flight_number: i64, status: ReservationStatus) -> Self {
        Self {
            customer_id,
            flight_number,
            status,
            new_customer: None,
            new_flight: None,
        }
    }

    /// Sets the attributes used to create a missing customer.
    #[must_use]
    pub fn with_new_customer(mut self, new_customer: Option<NewCustomerOptions>) -> Self {
        self.new_customer = new_customer;
        self
    }

    /// Sets the attributes used to create a missing flight.
    #[must_use]
    pub fn with_new_flight(mut self, new_flight: Option<AddFlightOptions>) -> Self {
        self.new_flight = new_flight;
        self
    }
}

/// A booking plan generator.
///
/// This struct analyzes a booking request against the current store state
/// and generates a plan that either updates an existing reservation or
/// creates a new one together with any missing customer or flight.
pub struct BookingPlan {
    options: BookFlightOptions,
}

impl BookingPlan {
    /// Creates a new booking plan generator with the given options.
    #[must_use]
    pub const fn new(options: BookFlightOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this booking request.
    ///
    /// This method performs all lookups and validation and determines what
    /// actions are needed. It does NOT modify the database.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The reservation is new and the flight is missing without
    ///   `new_flight` attributes, or the customer is missing without
    ///   `new_customer` attributes ([`Error::Validation`])
    /// - Supplied attributes fail field validation or date parsing
    /// - A `new_flight` references a pilot or plane that does not exist
    ///   ([`Error::NotFound`])
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use avia::operations::{BookFlightOptions, BookingPlan, PlanExecutor};
    /// use avia::database::{Database, DatabaseConfig};
    /// use avia::ReservationStatus;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/avia.db")).unwrap();
    /// let options = BookFlightOptions::new(7, 3, ReservationStatus::Confirmed);
    /// let plan = BookingPlan::new(options).build_plan(&db).unwrap();
    /// let result = PlanExecutor::new(&mut db).execute(&plan).unwrap();
    /// assert_eq!(result.status, Some(ReservationStatus::Confirmed));
    /// ```
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let conn = db.connection();
        let mut plan = OperationPlan::new(format!(
            "Book flight {} for customer {}",
            self.options.flight_number, self.options.customer_id
        ));

        // An existing reservation is keyed by the (customer, flight) pair;
        // booking it again overwrites the status.
        if let Some(existing) =
            Database::get_reservation(conn, self.options.customer_id, self.options.flight_number)?
        {
            log::debug!(
                "Reservation {} exists; planning status update to {}",
                existing.reservation_number(),
                self.options.status
            );
            if existing.status() == self.options.status {
                plan = plan.add_warning(format!(
                    "Reservation {} already has status {}",
                    existing.reservation_number(),
                    self.options.status.name()
                ));
            }
            plan = plan.add_action(PlanAction::UpdateReservationStatus {
                reservation_number: existing.reservation_number(),
                status: self.options.status,
            });
            return Ok(plan);
        }

        let mut reservation_flight = Some(self.options.flight_number);
        if !Database::flight_exists(conn, self.options.flight_number)? {
            let Some(new_flight) = &self.options.new_flight else {
                return Err(Error::Validation {
                    field: "flight_number".into(),
                    message: format!(
                        "flight {} does not exist; supply flight attributes to create it",
                        self.options.flight_number
                    ),
                });
            };
            log::debug!(
                "Flight {} not found; planning flight creation",
                self.options.flight_number
            );
            plan = plan
                .add_action(Self::create_flight_action(conn, new_flight)?)
                .add_warning(format!(
                    "Flight {} does not exist; the reservation will use a newly \
                     allocated flight number",
                    self.options.flight_number
                ));
            reservation_flight = None;
        }

        if !Database::customer_exists(conn, self.options.customer_id)? {
            let Some(new_customer) = &self.options.new_customer else {
                return Err(Error::Validation {
                    field: "customer_id".into(),
                    message: format!(
                        "customer {} does not exist; supply customer attributes to create it",
                        self.options.customer_id
                    ),
                });
            };
            let customer = self.build_customer(new_customer)?;
            plan = plan.add_action(PlanAction::CreateCustomer(customer));
        }

        plan = plan.add_action(PlanAction::CreateReservation {
            customer_id: self.options.customer_id,
            flight_number: reservation_flight,
            status: self.options.status,
        });

        Ok(plan)
    }

    /// Validates new-flight attributes and produces its plan action.
    fn create_flight_action(
        conn: &rusqlite::Connection,
        options: &AddFlightOptions,
    ) -> Result<PlanAction> {
        let departure_date = parse_date(&options.departure_date)?;
        let arrival_date = parse_date(&options.arrival_date)?;
        let flight = Flight::new(
            options.cost,
            options.seats_sold,
            options.stop_count,
            departure_date,
            arrival_date,
            &options.departure_airport,
            &options.arrival_airport,
        )?;

        if !Database::pilot_exists(conn, options.pilot_id)? {
            return Err(Error::NotFound {
                resource: format!("pilot {}", options.pilot_id),
            });
        }
        if !Database::plane_exists(conn, options.plane_id)? {
            return Err(Error::NotFound {
                resource: format!("plane {}", options.plane_id),
            });
        }

        Ok(PlanAction::CreateFlight {
            flight,
            pilot_id: options.pilot_id,
            plane_id: options.plane_id,
        })
    }

    /// Validates new-customer attributes under the booking's customer id.
    fn build_customer(&self, options: &NewCustomerOptions) -> Result<Customer> {
        let date_of_birth = parse_date(&options.date_of_birth)?;
        let customer = Customer::new(
            self.options.customer_id,
            &options.first_name,
            &options.last_name,
            &options.gender_code,
            date_of_birth,
            &options.address,
            &options.phone,
            &options.zip,
        )?;
        Ok(customer)
    }
}
