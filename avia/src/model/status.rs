//! Reservation status codes.

use std::fmt;
use std::str::FromStr;

/// The three-valued reservation state.
///
/// Persisted as the single-character codes `W`, `R`, and `C`. Any status
/// may transition to any other; there is no forward-only ordering.
///
/// # Examples
///
/// ```
/// use avia::ReservationStatus;
///
/// let status: ReservationStatus = "W".parse().unwrap();
/// assert_eq!(status, ReservationStatus::Waitlisted);
/// assert_eq!(status.code(), "W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationStatus {
    /// The passenger is on the waitlist.
    Waitlisted,
    /// A seat is held but not yet confirmed.
    Reserved,
    /// The reservation is confirmed.
    Confirmed,
}

impl ReservationStatus {
    /// Returns the single-character code persisted in the store.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Waitlisted => "W",
            Self::Reserved => "R",
            Self::Confirmed => "C",
        }
    }

    /// Returns a human-readable name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waitlisted => "Waitlisted",
            Self::Reserved => "Reserved",
            Self::Confirmed => "Confirmed",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error type for unrecognized status codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatusError {
    /// The input that failed to parse.
    pub input: String,
}

impl fmt::Display for InvalidStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid status '{}': expected one of W, R, C",
            self.input
        )
    }
}

impl std::error::Error for InvalidStatusError {}

impl FromStr for ReservationStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "W" | "w" => Ok(Self::Waitlisted),
            "R" | "r" => Ok(Self::Reserved),
            "C" | "c" => Ok(Self::Confirmed),
            other => Err(InvalidStatusError {
                input: other.to_string(),
            }),
        }
    }
}
