//! BookingStatus enum for tracking the lifecycle of a car booking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{StateMachine, ValidationError};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Booked,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Booked,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    /// Returns true if car name, days and daily rent may still change.
    pub fn allows_detail_changes(&self) -> bool {
        matches!(self, BookingStatus::Booked)
    }

    /// Returns true if the booking counts towards spend and booking totals.
    pub fn is_billable(&self) -> bool {
        matches!(self, BookingStatus::Booked | BookingStatus::Completed)
    }

    /// Returns the wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Booked => "booked",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl StateMachine for BookingStatus {
    /// Valid transitions:
    /// - any status -> itself (no-op)
    /// - Booked -> Completed
    /// - Booked -> Cancelled
    /// - Completed -> Cancelled
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStatus::*;
        self == target
            || matches!(
                (self, target),
                (Booked, Completed) | (Booked, Cancelled) | (Completed, Cancelled)
            )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStatus::*;
        match self {
            Booked => vec![Completed, Cancelled],
            Completed => vec![Cancelled],
            Cancelled => vec![],
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(BookingStatus::Booked),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown booking status '{}'", other),
            )),
        }
    }
}
