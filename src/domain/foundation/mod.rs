//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the booking domain.

mod auth;
mod booking_status;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use booking_status::BookingStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BookingId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
