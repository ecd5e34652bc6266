//! Reservation row type.

use super::{ReservationStatus, ValidationError};

/// A persisted reservation row.
///
/// Reservations are the one entity read back and mutated through its row:
/// the booking workflow looks reservations up by the (customer, flight)
/// natural key and overwrites the status in place. The reservation number
/// is the surrogate key and is never used for lookup.
///
/// # Examples
///
/// ```
/// use avia::{Reservation, ReservationStatus};
///
/// let r = Reservation::new(1, 7, 3, ReservationStatus::Waitlisted).unwrap();
/// assert_eq!(r.status(), ReservationStatus::Waitlisted);
/// let r = r.with_status(ReservationStatus::Confirmed);
/// assert_eq!(r.status(), ReservationStatus::Confirmed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    reservation_number: i64,
    customer_id: i64,
    flight_number: i64,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates a reservation row.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any identifier is non-positive.
    pub fn new(
        reservation_number: i64,
        customer_id: i64,
        flight_number: i64,
        status: ReservationStatus,
    ) -> Result<Self, ValidationError> {
        if reservation_number < 1 {
            return Err(ValidationError::new(
                "reservation_number",
                "must be a positive integer",
            ));
        }
        if customer_id < 1 {
            return Err(ValidationError::new(
                "customer_id",
                "must be a positive integer",
            ));
        }
        if flight_number < 1 {
            return Err(ValidationError::new(
                "flight_number",
                "must be a positive integer",
            ));
        }
        Ok(Self {
            reservation_number,
            customer_id,
            flight_number,
            status,
        })
    }

    /// Returns the surrogate reservation number.
    #[must_use]
    pub const fn reservation_number(&self) -> i64 {
        self.reservation_number
    }

    /// Returns the customer id.
    #[must_use]
    pub const fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Returns the flight number.
    #[must_use]
    pub const fn flight_number(&self) -> i64 {
        self.flight_number
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns a copy with the status replaced.
    ///
    /// All transitions are legal; there is no forward-only ordering.
    #[must_use]
    pub const fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }
}
