//! GetBookingHandler - Query handler for a single booking.

use std::sync::Arc;

use tracing::debug;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{BookingId, UserId};
use crate::ports::BookingRepository;

/// Query to get a booking by ID.
#[derive(Debug, Clone)]
pub struct GetBookingQuery {
    pub booking_id: BookingId,
    pub user_id: UserId,
}

/// Handler for retrieving one booking owned by the caller.
pub struct GetBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl GetBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBookingQuery) -> Result<Booking, BookingError> {
        let booking = self
            .repository
            .find_by_id(&query.booking_id)
            .await?
            .ok_or_else(|| BookingError::not_found(query.booking_id))?;

        if let Err(err) = booking.authorize(&query.user_id) {
            debug!(
                booking_id = %query.booking_id,
                user_id = %query.user_id,
                "Booking read by non-owner"
            );
            return Err(err);
        }

        Ok(booking)
    }
}
