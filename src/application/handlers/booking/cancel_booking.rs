//! CancelBookingHandler - Command handler for cancelling (soft-deleting) bookings.

use std::sync::Arc;

use tracing::info;

use crate::domain::booking::{Booking, BookingError};
use crate::domain::foundation::{BookingId, UserId};
use crate::ports::BookingRepository;

/// Command to cancel a booking.
#[derive(Debug, Clone)]
pub struct CancelBookingCommand {
    pub booking_id: BookingId,
    pub user_id: UserId,
}

/// Handler for cancelling bookings.
pub struct CancelBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl CancelBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    /// Ownership is checked before the current status, so a non-owner gets
    /// `Forbidden` even for a booking that is already cancelled.
    pub async fn handle(&self, cmd: CancelBookingCommand) -> Result<Booking, BookingError> {
        let mut booking = self
            .repository
            .find_by_id(&cmd.booking_id)
            .await?
            .ok_or_else(|| BookingError::not_found(cmd.booking_id))?;

        booking.authorize(&cmd.user_id)?;
        booking.cancel()?;

        self.repository.update(&booking).await?;

        info!(booking_id = %booking.id(), user_id = %cmd.user_id, "Booking cancelled");

        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingRepository;
    use crate::domain::foundation::BookingStatus;

    fn owner() -> UserId {
        UserId::new("owner").unwrap()
    }

    async fn setup() -> (CancelBookingHandler, Arc<InMemoryBookingRepository>, BookingId) {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let booking =
            Booking::new(BookingId::new(), owner(), "Honda City".to_string(), 3, 1500.0).unwrap();
        let id = *booking.id();
        repo.save(&booking).await.unwrap();
        (CancelBookingHandler::new(repo.clone()), repo, id)
    }

    fn cancel(booking_id: BookingId, user_id: UserId) -> CancelBookingCommand {
        CancelBookingCommand {
            booking_id,
            user_id,
        }
    }

    #[tokio::test]
    async fn cancels_and_keeps_the_record() {
        let (handler, repo, id) = setup().await;

        let booking = handler.handle(cancel(id, owner())).await.unwrap();

        assert_eq!(booking.status(), BookingStatus::Cancelled);
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status(), BookingStatus::Cancelled);
        assert_eq!(stored.total_cost(), 4500.0);
    }

    #[tokio::test]
    async fn cancelling_twice_fails() {
        let (handler, _, id) = setup().await;
        handler.handle(cancel(id, owner())).await.unwrap();

        let result = handler.handle(cancel(id, owner())).await;
        assert_eq!(result, Err(BookingError::AlreadyCancelled));
    }

    #[tokio::test]
    async fn non_owner_is_forbidden_even_when_cancelled() {
        let (handler, _, id) = setup().await;
        handler.handle(cancel(id, owner())).await.unwrap();

        let result = handler
            .handle(cancel(id, UserId::new("intruder").unwrap()))
            .await;
        assert_eq!(result, Err(BookingError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let (handler, _, _) = setup().await;

        let result = handler.handle(cancel(BookingId::new(), owner())).await;
        assert!(matches!(result, Err(BookingError::NotFound(_))));
    }
}
