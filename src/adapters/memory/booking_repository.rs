//! In-memory booking repository.
//!
//! Used by tests and by local runs with the `memory` database backend.
//! Each call takes the lock once; there is no read-modify-write protection
//! across calls, matching the Postgres adapter's last-write-wins behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode, UserId};
use crate::ports::BookingRepository;

/// Booking store backed by a `HashMap`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<HashMap<BookingId, Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookings (test helper).
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut bookings = self.bookings.write().await;
        if bookings.contains_key(booking.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Booking already exists: {}", booking.id()),
            ));
        }
        bookings.insert(*booking.id(), booking.clone());
        Ok(())
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut bookings = self.bookings.write().await;
        match bookings.get_mut(booking.id()) {
            Some(stored) => {
                *stored = booking.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        Ok(self.bookings.read().await.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut owned: Vec<Booking> = bookings
            .values()
            .filter(|b| b.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|b| (*b.created_at(), *b.id()));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BookingStatus, Timestamp};

    fn booking_for(user: &str) -> Booking {
        Booking::new(
            BookingId::new(),
            UserId::new(user).unwrap(),
            "Honda City".to_string(),
            3,
            1500.0,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn saves_and_finds_by_id() {
        let repo = InMemoryBookingRepository::new();
        let booking = booking_for("alice");
        repo.save(&booking).await.unwrap();

        let found = repo.find_by_id(booking.id()).await.unwrap();
        assert_eq!(found, Some(booking));
    }

    #[tokio::test]
    async fn save_twice_is_a_conflict() {
        let repo = InMemoryBookingRepository::new();
        let booking = booking_for("alice");
        repo.save(&booking).await.unwrap();

        let err = repo.save(&booking).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn update_unknown_booking_fails() {
        let repo = InMemoryBookingRepository::new();
        let err = repo.update(&booking_for("alice")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }

    #[tokio::test]
    async fn find_by_user_id_only_returns_owned_bookings() {
        let repo = InMemoryBookingRepository::new();
        let first = booking_for("alice");
        let second = booking_for("alice");
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&booking_for("bob")).await.unwrap();

        let alice = UserId::new("alice").unwrap();
        let owned = repo.find_by_user_id(&alice).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|b| b.user_id() == &alice));
        assert!(owned[0].created_at() <= owned[1].created_at());
    }

    #[tokio::test]
    async fn same_instant_bookings_list_in_id_order() {
        let repo = InMemoryBookingRepository::new();
        let alice = UserId::new("alice").unwrap();
        let created = Timestamp::now();

        let mut ids: Vec<BookingId> = (0..8).map(|_| BookingId::new()).collect();
        for id in &ids {
            let booking = Booking::reconstitute(
                *id,
                alice.clone(),
                "Honda City".to_string(),
                3,
                1500.0,
                4500.0,
                BookingStatus::Booked,
                created,
                created,
            );
            repo.save(&booking).await.unwrap();
        }
        ids.sort();

        for _ in 0..3 {
            let listed: Vec<BookingId> = repo
                .find_by_user_id(&alice)
                .await
                .unwrap()
                .iter()
                .map(|b| *b.id())
                .collect();
            assert_eq!(listed, ids);
        }
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryBookingRepository::new();
        let handle = repo.clone();
        repo.save(&booking_for("alice")).await.unwrap();
        assert_eq!(handle.len().await, 1);
    }
}
