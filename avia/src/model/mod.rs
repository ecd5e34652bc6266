//! Domain model types for airline operational records.
//!
//! Each entity type validates its field constraints at construction time,
//! so a constructed value is always safe to persist. Surrogate identifiers
//! are assigned by the store at insert time and are therefore not part of
//! the attribute types; [`Reservation`] is the exception, since reservations
//! are read back and updated through their persisted row.

mod customer;
mod date;
mod flight;
mod pilot;
mod plane;
mod repair;
mod reservation;
mod status;
mod technician;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use customer::Customer;
pub use date::{parse_date, DateFormatError};
pub use flight::Flight;
pub use pilot::Pilot;
pub use plane::Plane;
pub use repair::Repair;
pub use reservation::Reservation;
pub use status::{InvalidStatusError, ReservationStatus};
pub use technician::Technician;

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates that a trimmed string is non-empty and within a length limit.
///
/// Returns the trimmed value on success.
pub(crate) fn required_text(
    field: &str,
    value: &str,
    max_len: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must be non-empty"));
    }
    if trimmed.chars().count() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates that a string has exactly the given character count.
pub(crate) fn exact_text(
    field: &str,
    value: &str,
    len: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() != len {
        return Err(ValidationError::new(
            field,
            format!("must be exactly {len} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates that a numeric value lies within an inclusive range.
pub(crate) fn bounded_number(
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims_and_accepts() {
        let value = required_text("make", "  Boeing  ", 32).unwrap();
        assert_eq!(value, "Boeing");
    }

    #[test]
    fn test_required_text_rejects_empty() {
        let err = required_text("make", "   ", 32).unwrap_err();
        assert_eq!(err.field, "make");
        assert!(err.message.contains("non-empty"));
    }

    #[test]
    fn test_required_text_rejects_too_long() {
        let err = required_text("make", &"x".repeat(33), 32).unwrap_err();
        assert!(err.message.contains("at most 32"));
    }

    #[test]
    fn test_exact_text() {
        assert!(exact_text("airport", "JFK01", 5).is_ok());
        assert!(exact_text("airport", "JFK", 5).is_err());
        assert!(exact_text("airport", "JFK001", 5).is_err());
    }

    #[test]
    fn test_bounded_number() {
        assert_eq!(bounded_number("seat_count", 250, 1, 499).unwrap(), 250);
        assert!(bounded_number("seat_count", 0, 1, 499).is_err());
        assert!(bounded_number("seat_count", 500, 1, 499).is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("phone", "must be at most 10 characters");
        let display = format!("{err}");
        assert!(display.contains("phone"));
        assert!(display.contains("at most 10"));
    }
}
