//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the avia library.

pub mod database;

use avia::model::parse_date;
use avia::Customer;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for creating test customers with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::CustomerFixture;
/// let customer = CustomerFixture::new(7)
///     .with_name("Grace", "Hopper")
///     .build();
/// ```
#[allow(dead_code)]
pub struct CustomerFixture {
    id: i64,
    first_name: String,
    last_name: String,
    gender_code: String,
    date_of_birth: String,
    address: String,
    phone: String,
    zip: String,
}

#[allow(dead_code)]
impl CustomerFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - name: Ada Lovelace
    /// - gender code: F
    /// - date of birth: 1985-07-20
    /// - address, phone, zip: fixed sample values
    pub fn new(id: i64) -> Self {
        Self {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            gender_code: "F".to_string(),
            date_of_birth: "1985-07-20".to_string(),
            address: "12 Analytical Way".to_string(),
            phone: "5551234567".to_string(),
            zip: "94040".to_string(),
        }
    }

    /// Sets the customer's name.
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the single-character gender code.
    pub fn with_gender_code(mut self, gender_code: impl Into<String>) -> Self {
        self.gender_code = gender_code.into();
        self
    }

    /// Sets the date of birth.
    pub fn with_date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }

    /// Builds the customer.
    ///
    /// # Panics
    ///
    /// Panics if any field fails validation. This is acceptable in test
    /// code where we want to fail fast on invalid fixtures.
    pub fn build(self) -> Customer {
        Customer::new(
            self.id,
            &self.first_name,
            &self.last_name,
            &self.gender_code,
            parse_date(&self.date_of_birth).expect("fixture should have valid date of birth"),
            &self.address,
            &self.phone,
            &self.zip,
        )
        .expect("fixture should build valid customer")
    }
}
