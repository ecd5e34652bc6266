//! Customer attribute type.

use chrono::NaiveDate;

use super::{exact_text, required_text, ValidationError};

/// Validates an optional free-text field against a length cap.
///
/// Unlike names, these fields may be left blank.
fn capped_text(field: &str, value: &str, max_len: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Attributes of a customer record.
///
/// Unlike the other entities, the customer id is caller-supplied: it is a
/// lookup key, never allocated. Name fields are capped at 24 characters,
/// the gender code is exactly one character, address at 256, and phone and
/// zip at 10 each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: i64,
    first_name: String,
    last_name: String,
    gender_code: String,
    date_of_birth: NaiveDate,
    address: String,
    phone: String,
    zip: String,
}

impl Customer {
    /// Creates a validated customer record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field violates its constraint.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        first_name: &str,
        last_name: &str,
        gender_code: &str,
        date_of_birth: NaiveDate,
        address: &str,
        phone: &str,
        zip: &str,
    ) -> Result<Self, ValidationError> {
        if id < 1 {
            return Err(ValidationError::new("id", "must be a positive integer"));
        }
        Ok(Self {
            id,
            first_name: required_text("first_name", first_name, 24)?,
            last_name: required_text("last_name", last_name, 24)?,
            gender_code: exact_text("gender_code", gender_code, 1)?,
            date_of_birth,
            address: capped_text("address", address, 256)?,
            phone: capped_text("phone", phone, 10)?,
            zip: capped_text("zip", zip, 10)?,
        })
    }

    /// Returns the caller-supplied customer id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the single-character gender code.
    #[must_use]
    pub fn gender_code(&self) -> &str {
        &self.gender_code
    }

    /// Returns the date of birth.
    #[must_use]
    pub const fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Returns the street address, possibly empty.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the phone number, possibly empty.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the zip code, possibly empty.
    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }
}
