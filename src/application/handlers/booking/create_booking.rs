//! CreateBookingHandler - Command handler for creating bookings.

use std::sync::Arc;

use tracing::info;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{BookingId, UserId};
use crate::ports::BookingRepository;

/// Command to create a new booking.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub user_id: UserId,
    pub car_name: String,
    pub days: u32,
    pub rent_per_day: f64,
}

/// Handler for creating bookings.
pub struct CreateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateBookingCommand) -> Result<Booking, BookingError> {
        // 1. Build the aggregate (validates bounds, computes total)
        let booking = Booking::new(
            BookingId::new(),
            cmd.user_id,
            cmd.car_name,
            cmd.days,
            cmd.rent_per_day,
        )?;

        // 2. Persist
        self.repository.save(&booking).await?;

        info!(
            booking_id = %booking.id(),
            user_id = %booking.user_id(),
            total_cost = booking.total_cost(),
            "Booking created"
        );

        Ok(booking)
    }
}
