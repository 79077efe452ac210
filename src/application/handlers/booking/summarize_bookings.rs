//! SummarizeBookingsHandler - Query handler for per-user booking statistics.

use std::sync::Arc;

use crate::domain::booking::{BookingError, BookingSummary};
use crate::domain::foundation::UserId;
use crate::ports::BookingRepository;

/// Query for the caller's booking summary.
#[derive(Debug, Clone)]
pub struct SummarizeBookingsQuery {
    pub user_id: UserId,
}

/// Handler computing a summary from a single read of the caller's bookings.
pub struct SummarizeBookingsHandler {
    repository: Arc<dyn BookingRepository>,
}

impl SummarizeBookingsHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: SummarizeBookingsQuery,
    ) -> Result<BookingSummary, BookingError> {
        let bookings = self.repository.find_by_user_id(&query.user_id).await?;

        if bookings.is_empty() {
            return Err(BookingError::NoBookings);
        }

        Ok(BookingSummary::from_bookings(&bookings))
    }
}
