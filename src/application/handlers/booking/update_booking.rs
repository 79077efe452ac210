//! UpdateBookingHandler - Command handler for partial booking updates.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::booking::{Booking, BookingError, BookingPatch};
use crate::domain::foundation::{BookingId, UserId, ValidationError};
use crate::ports::BookingRepository;

/// Command to apply a partial update to a booking.
///
/// `patch` carries the outcome of request validation. A malformed request
/// still goes through the existence and ownership checks first, so a caller
/// probing someone else's booking never learns whether their payload was
/// well-formed.
#[derive(Debug, Clone)]
pub struct UpdateBookingCommand {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub patch: Result<BookingPatch, ValidationError>,
}

/// Handler for updating bookings.
pub struct UpdateBookingHandler {
    repository: Arc<dyn BookingRepository>,
}

impl UpdateBookingHandler {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateBookingCommand) -> Result<Booking, BookingError> {
        // 1. Load booking
        let mut booking = self
            .repository
            .find_by_id(&cmd.booking_id)
            .await?
            .ok_or_else(|| BookingError::not_found(cmd.booking_id))?;

        // 2. Authorize - user must be owner
        booking.authorize(&cmd.user_id)?;

        // 3. Apply (schema, empty patch, locked details, transition)
        let patch = cmd.patch?;
        if let Err(err) = booking.apply(patch) {
            debug!(booking_id = %cmd.booking_id, error = %err, "Booking update rejected");
            return Err(err);
        }

        // 4. Persist
        self.repository.update(&booking).await?;

        info!(
            booking_id = %booking.id(),
            status = %booking.status(),
            total_cost = booking.total_cost(),
            "Booking updated"
        );

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

    async fn setup() -> (UpdateBookingHandler, Arc<InMemoryBookingRepository>, BookingId) {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let booking =
            Booking::new(BookingId::new(), owner(), "Honda City".to_string(), 3, 1500.0).unwrap();
        let id = *booking.id();
        repo.save(&booking).await.unwrap();
        (UpdateBookingHandler::new(repo.clone()), repo, id)
    }

    fn cmd(booking_id: BookingId, patch: BookingPatch) -> UpdateBookingCommand {
        UpdateBookingCommand {
            booking_id,
            user_id: owner(),
            patch: Ok(patch),
        }
    }

    #[tokio::test]
    async fn recomputes_total_and_persists() {
        let (handler, repo, id) = setup().await;

        let updated = handler
            .handle(cmd(
                id,
                BookingPatch {
                    days: Some(4),
                    rent_per_day: Some(1600.0),
                    ..Default::default()
                },
            ))
            .await
            .unwrap();

        assert_eq!(updated.total_cost(), 6400.0);
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.total_cost(), 6400.0);
    }

    #[tokio::test]
    async fn not_found_before_anything_else() {
        let (handler, _, _) = setup().await;

        let result = handler
            .handle(UpdateBookingCommand {
                booking_id: BookingId::new(),
                user_id: owner(),
                patch: Err(ValidationError::empty_field("body")),
            })
            .await;

        assert!(matches!(result, Err(BookingError::NotFound(_))));
    }

    #[tokio::test]
    async fn forbidden_before_schema_errors() {
        let (handler, _, id) = setup().await;

        let result = handler
            .handle(UpdateBookingCommand {
                booking_id: id,
                user_id: UserId::new("intruder").unwrap(),
                patch: Err(ValidationError::empty_field("body")),
            })
            .await;

        assert_eq!(result, Err(BookingError::Forbidden));
    }

    #[tokio::test]
    async fn schema_error_for_owner() {
        let (handler, _, id) = setup().await;

        let result = handler
            .handle(UpdateBookingCommand {
                booking_id: id,
                user_id: owner(),
                patch: Err(ValidationError::out_of_range("days", 1.0, 365.0, 0.0)),
            })
            .await;

        assert!(matches!(result, Err(BookingError::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn rejected_update_leaves_store_untouched() {
        let (handler, repo, id) = setup().await;
        handler
            .handle(cmd(id, BookingPatch::status(BookingStatus::Cancelled)))
            .await
            .unwrap();

        let result = handler
            .handle(cmd(id, BookingPatch::status(BookingStatus::Booked)))
            .await;

        assert!(matches!(result, Err(BookingError::InvalidTransition { .. })));
        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status(), BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn lifecycle_scenario() {
        let (handler, _, id) = setup().await;

        let completed = handler
            .handle(cmd(id, BookingPatch::status(BookingStatus::Completed)))
            .await
            .unwrap();
        assert_eq!(completed.status(), BookingStatus::Completed);

        let rename = handler
            .handle(cmd(
                id,
                BookingPatch {
                    car_name: Some("X".to_string()),
                    ..Default::default()
                },
            ))
            .await;
        assert!(rename.unwrap_err().is_invalid_request());

        let cancelled = handler
            .handle(cmd(id, BookingPatch::status(BookingStatus::Cancelled)))
            .await
            .unwrap();
        assert_eq!(cancelled.status(), BookingStatus::Cancelled);

        let reopen = handler
            .handle(cmd(id, BookingPatch::status(BookingStatus::Booked)))
            .await;
        assert!(reopen.unwrap_err().is_invalid_request());
    }

    /// Updates are not serialized: two edits computed from the same snapshot
    /// both succeed and the later write replaces the earlier one.
    #[tokio::test]
    async fn concurrent_updates_are_last_write_wins() {
        let (_, repo, id) = setup().await;

        let mut first = repo.find_by_id(&id).await.unwrap().unwrap();
        let mut second = repo.find_by_id(&id).await.unwrap().unwrap();

        first
            .apply(BookingPatch {
                days: Some(10),
                ..Default::default()
            })
            .unwrap();
        second
            .apply(BookingPatch {
                car_name: Some("Verna".to_string()),
                ..Default::default()
            })
            .unwrap();

        repo.update(&first).await.unwrap();
        repo.update(&second).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.car_name(), "Verna");
        assert_eq!(stored.days(), 3);
        assert_eq!(stored.total_cost(), 4500.0);
    }
}
