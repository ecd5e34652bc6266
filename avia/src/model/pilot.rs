//! Pilot attribute type.

use super::{required_text, ValidationError};

/// Attributes of a pilot record: `full_name` at most 128 characters,
/// `nationality` at most 24.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pilot {
    full_name: String,
    nationality: String,
}

impl Pilot {
    /// Creates a validated pilot record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field violates its constraint.
    pub fn new(full_name: &str, nationality: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: required_text("full_name", full_name, 128)?,
            nationality: required_text("nationality", nationality, 24)?,
        })
    }

    /// Returns the pilot's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the pilot's nationality.
    #[must_use]
    pub fn nationality(&self) -> &str {
        &self.nationality
    }
}
