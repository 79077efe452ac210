//! State machine trait for status enums.
//!
//! A status type declares its transition table once through
//! [`StateMachine::can_transition_to`]; callers go through
//! [`StateMachine::transition_to`] so every status change is checked
//! against that table before any mutation happens.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// let next = BookingStatus::Booked.transition_to(BookingStatus::Completed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states other than the current one.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::BookingStatus;

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let result = BookingStatus::Booked.transition_to(BookingStatus::Completed);
        assert_eq!(result, Ok(BookingStatus::Completed));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let result = BookingStatus::Cancelled.transition_to(BookingStatus::Booked);
        match result {
            Err(ValidationError::InvalidFormat { field, reason }) => {
                assert_eq!(field, "status");
                assert!(reason.contains("Cancelled"));
                assert!(reason.contains("Booked"));
            }
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn is_terminal_only_for_cancelled() {
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Booked.is_terminal());
        assert!(!BookingStatus::Completed.is_terminal());
    }
}
