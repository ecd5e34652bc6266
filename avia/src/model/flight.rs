//! Flight attribute type.

use chrono::NaiveDate;

use super::{bounded_number, exact_text, ValidationError};

/// Attributes of a flight record.
///
/// The flight number is assigned by the store at insert time. Airport codes
/// must be exactly 5 characters; dates are already-parsed calendar dates
/// (see [`parse_date`](super::parse_date) for parsing operator input).
///
/// # Examples
///
/// ```
/// use avia::Flight;
/// use avia::model::parse_date;
///
/// let flight = Flight::new(
///     450,
///     0,
///     1,
///     parse_date("2024-06-01").unwrap(),
///     parse_date("2024-06-02").unwrap(),
///     "KJFK1",
///     "EGLL1",
/// )
/// .unwrap();
/// assert_eq!(flight.seats_sold(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    cost: i64,
    seats_sold: i64,
    stop_count: i64,
    departure_date: NaiveDate,
    arrival_date: NaiveDate,
    departure_airport: String,
    arrival_airport: String,
}

impl Flight {
    /// Creates a validated flight record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field violates its constraint:
    /// `cost` must be positive, `seats_sold` and `stop_count` non-negative,
    /// airport codes exactly 5 characters.
    pub fn new(
        cost: i64,
        seats_sold: i64,
        stop_count: i64,
        departure_date: NaiveDate,
        arrival_date: NaiveDate,
        departure_airport: &str,
        arrival_airport: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            cost: bounded_number("cost", cost, 1, i64::MAX)?,
            seats_sold: bounded_number("seats_sold", seats_sold, 0, i64::MAX)?,
            stop_count: bounded_number("stop_count", stop_count, 0, i64::MAX)?,
            departure_date,
            arrival_date,
            departure_airport: exact_text("departure_airport", departure_airport, 5)?,
            arrival_airport: exact_text("arrival_airport", arrival_airport, 5)?,
        })
    }

    /// Returns the ticket cost.
    #[must_use]
    pub const fn cost(&self) -> i64 {
        self.cost
    }

    /// Returns the number of seats already sold.
    #[must_use]
    pub const fn seats_sold(&self) -> i64 {
        self.seats_sold
    }

    /// Returns the number of stops.
    #[must_use]
    pub const fn stop_count(&self) -> i64 {
        self.stop_count
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn arrival_date(&self) -> NaiveDate {
        self.arrival_date
    }

    /// Returns the departure airport code.
    #[must_use]
    pub fn departure_airport(&self) -> &str {
        &self.departure_airport
    }

    /// Returns the arrival airport code.
    #[must_use]
    pub fn arrival_airport(&self) -> &str {
        &self.arrival_airport
    }
}
