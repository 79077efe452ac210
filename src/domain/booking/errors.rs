//! Booking-specific error types.

use thiserror::Error;

use crate::domain::foundation::{BookingId, BookingStatus, DomainError, ErrorCode, ValidationError};

/// Errors produced by the booking lifecycle and summary operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    /// No booking exists with the given id.
    #[error("Booking not found: {0}")]
    NotFound(BookingId),

    /// The booking exists but belongs to another user.
    #[error("Permission denied")]
    Forbidden,

    /// The caller has no bookings matching the request.
    #[error("No bookings found for this user.")]
    NoBookings,

    /// An update carried none of the recognized fields.
    #[error("At least one field must be provided for update")]
    EmptyPatch,

    /// Car details were touched on a completed or cancelled booking.
    #[error("Cannot modify car details for a completed or cancelled booking")]
    DetailsLocked(BookingStatus),

    /// The requested status change is not in the transition table.
    #[error("Cannot change status from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Cancellation requested on a booking that is already cancelled.
    #[error("Cannot Delete Already Cancelled Booking")]
    AlreadyCancelled,

    /// Structural validation failed.
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationError),

    /// Store or other unexpected failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl BookingError {
    pub fn not_found(id: BookingId) -> Self {
        BookingError::NotFound(id)
    }

    pub fn forbidden() -> Self {
        BookingError::Forbidden
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    /// True for every rejection that maps to the "invalid request" category.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            BookingError::EmptyPatch
                | BookingError::DetailsLocked(_)
                | BookingError::InvalidTransition { .. }
                | BookingError::AlreadyCancelled
                | BookingError::ValidationFailed(_)
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::NotFound(_) | BookingError::NoBookings => ErrorCode::BookingNotFound,
            BookingError::Forbidden => ErrorCode::Forbidden,
            BookingError::EmptyPatch | BookingError::ValidationFailed(_) => {
                ErrorCode::ValidationFailed
            }
            BookingError::DetailsLocked(_) => ErrorCode::BookingClosed,
            BookingError::InvalidTransition { .. } | BookingError::AlreadyCancelled => {
                ErrorCode::InvalidStateTransition
            }
            BookingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::ValidationFailed(err)
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => BookingError::Forbidden,
            ErrorCode::ValidationFailed => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                BookingError::ValidationFailed(ValidationError::invalid_format(field, err.message))
            }
            _ => BookingError::Infrastructure(err.to_string()),
        }
    }
}
