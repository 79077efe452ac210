//! ListBookingsHandler - Query handler for the caller's bookings.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{BookingStatus, UserId};
use crate::ports::BookingRepository;

/// Query to list a user's bookings, optionally narrowed to one status.
#[derive(Debug, Clone)]
pub struct ListBookingsQuery {
    pub user_id: UserId,
    pub status: Option<BookingStatus>,
}

/// Handler for listing bookings.
pub struct ListBookingsHandler {
    repository: Arc<dyn BookingRepository>,
}

impl ListBookingsHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// Returns the caller's bookings in creation order.
    ///
    /// # Errors
    ///
    /// - `NoBookings` if nothing matches
    pub async fn handle(&self, query: ListBookingsQuery) -> Result<Vec<Booking>, BookingError> {
        let mut bookings = self.repository.find_by_user_id(&query.user_id).await?;

        if let Some(status) = query.status {
            bookings.retain(|b| b.status() == status);
        }

        if bookings.is_empty() {
            debug!(user_id = %query.user_id, status = ?query.status, "No bookings to list");
            return Err(BookingError::NoBookings);
        }

        Ok(bookings)
    }
}
