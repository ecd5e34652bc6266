//! Plane attribute type.

use super::{bounded_number, required_text, ValidationError};

/// Attributes of an aircraft record.
///
/// The surrogate id is assigned by the store at insert time and is not part
/// of this type. A constructed `Plane` has already passed field validation:
/// `make` at most 32 characters, `model` at most 64, `age` non-negative,
/// and `seat_count` between 1 and 499.
///
/// # Examples
///
/// ```
/// use avia::Plane;
///
/// let plane = Plane::new("Boeing", "737-800", 12, 189).unwrap();
/// assert_eq!(plane.seat_count(), 189);
/// assert!(Plane::new("Boeing", "737-800", 12, 500).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    make: String,
    model: String,
    age: i64,
    seat_count: i64,
}

impl Plane {
    /// Maximum seats on any plane.
    pub const MAX_SEATS: i64 = 499;

    /// Creates a validated plane record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field violates its constraint.
    pub fn new(
        make: &str,
        model: &str,
        age: i64,
        seat_count: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            make: required_text("make", make, 32)?,
            model: required_text("model", model, 64)?,
            age: bounded_number("age", age, 0, i64::MAX)?,
            seat_count: bounded_number("seat_count", seat_count, 1, Self::MAX_SEATS)?,
        })
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Returns the model designation.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the age of the airframe in years.
    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }

    /// Returns the total seat count.
    #[must_use]
    pub const fn seat_count(&self) -> i64 {
        self.seat_count
    }
}
