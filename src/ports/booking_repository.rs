//! Booking repository port.
//!
//! Defines the contract for persisting and retrieving Booking aggregates.
//! Bookings are never removed, so there is no delete operation.

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, UserId};

/// Repository port for Booking aggregate persistence.
///
/// Writes are plain overwrites of the stored record. Two updates computed
/// from the same snapshot both succeed and the later one wins.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Save a new booking.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Overwrite an existing booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if booking doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Find a booking by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError>;

    /// Find all bookings owned by a user, ordered by created_at ascending.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError>;
}
