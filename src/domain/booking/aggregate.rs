//! Booking aggregate entity.
//!
//! A booking ties one user to a car, a number of rental days and a daily
//! rate. The aggregate is the only place where status changes and cost
//! recalculation happen.

use serde::{Deserialize, Serialize};

use super::{BookingError, BookingPatch};
use crate::domain::foundation::{
    BookingId, BookingStatus, StateMachine, Timestamp, UserId, ValidationError,
};

/// Minimum length for a car name.
pub const MIN_CAR_NAME_LENGTH: usize = 2;

/// Maximum length for a car name.
pub const MAX_CAR_NAME_LENGTH: usize = 50;

/// Minimum rental duration in days.
pub const MIN_DAYS: u32 = 1;

/// Maximum rental duration in days.
pub const MAX_DAYS: u32 = 365;

/// Lowest accepted daily rent.
pub const MIN_RENT_PER_DAY: f64 = 100.0;

/// Highest accepted daily rent.
pub const MAX_RENT_PER_DAY: f64 = 2000.0;

/// Booking aggregate.
///
/// # Invariants
///
/// - `total_cost == days * rent_per_day` after every mutation
/// - `user_id` never changes
/// - Car details are frozen once the booking is completed or cancelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    user_id: UserId,
    car_name: String,
    days: u32,
    rent_per_day: f64,
    total_cost: f64,
    status: BookingStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Booking {
    /// Create a new booking in the `booked` state.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if any field is outside its bounds
    pub fn new(
        id: BookingId,
        user_id: UserId,
        car_name: String,
        days: u32,
        rent_per_day: f64,
    ) -> Result<Self, ValidationError> {
        validate_car_name(&car_name)?;
        validate_days(days)?;
        validate_rent_per_day(rent_per_day)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            car_name,
            days,
            rent_per_day,
            total_cost: total_cost(days, rent_per_day),
            status: BookingStatus::Booked,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a booking from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: BookingId,
        user_id: UserId,
        car_name: String,
        days: u32,
        rent_per_day: f64,
        total_cost: f64,
        status: BookingStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            car_name,
            days,
            rent_per_day,
            total_cost,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &BookingId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn car_name(&self) -> &str {
        &self.car_name
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn rent_per_day(&self) -> f64 {
        self.rent_per_day
    }

    /// Returns `days * rent_per_day`.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this booking.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can access this booking.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), BookingError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(BookingError::forbidden())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a partial update.
    ///
    /// Checks run in a fixed order: empty patch, field bounds, frozen car
    /// details, then the status transition. Nothing is modified unless every
    /// check passes.
    ///
    /// # Errors
    ///
    /// - `EmptyPatch` if the patch has no recognized field
    /// - `ValidationFailed` if a patched value is out of bounds
    /// - `DetailsLocked` if details are touched on a completed/cancelled booking
    /// - `InvalidTransition` if the status change is not allowed
    pub fn apply(&mut self, patch: BookingPatch) -> Result<(), BookingError> {
        if patch.is_empty() {
            return Err(BookingError::EmptyPatch);
        }

        if let Some(name) = &patch.car_name {
            validate_car_name(name)?;
        }
        if let Some(days) = patch.days {
            validate_days(days)?;
        }
        if let Some(rent) = patch.rent_per_day {
            validate_rent_per_day(rent)?;
        }

        if patch.touches_details() && !self.status.allows_detail_changes() {
            return Err(BookingError::DetailsLocked(self.status));
        }

        let next_status = match patch.status {
            Some(target) => self
                .status
                .transition_to(target)
                .map_err(|_| BookingError::InvalidTransition {
                    from: self.status,
                    to: target,
                })?,
            None => self.status,
        };

        let recompute = patch.touches_cost();
        if let Some(name) = patch.car_name {
            self.car_name = name;
        }
        if let Some(days) = patch.days {
            self.days = days;
        }
        if let Some(rent) = patch.rent_per_day {
            self.rent_per_day = rent;
        }
        if recompute {
            self.total_cost = total_cost(self.days, self.rent_per_day);
        }
        self.status = next_status;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Cancel the booking (soft delete).
    ///
    /// # Errors
    ///
    /// - `AlreadyCancelled` if the booking is already cancelled
    pub fn cancel(&mut self) -> Result<(), BookingError> {
        if self.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled);
        }

        self.status = self
            .status
            .transition_to(BookingStatus::Cancelled)
            .map_err(|_| BookingError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Cancelled,
            })?;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

/// Total price of a rental.
pub fn total_cost(days: u32, rent_per_day: f64) -> f64 {
    f64::from(days) * rent_per_day
}

/// Validates a car name's length (2-50 characters).
pub fn validate_car_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(ValidationError::empty_field("carName"));
    }
    if len < MIN_CAR_NAME_LENGTH {
        return Err(ValidationError::too_short("carName", MIN_CAR_NAME_LENGTH));
    }
    if len > MAX_CAR_NAME_LENGTH {
        return Err(ValidationError::too_long("carName", MAX_CAR_NAME_LENGTH));
    }
    Ok(())
}

/// Validates the rental duration (1-365 days).
pub fn validate_days(days: u32) -> Result<(), ValidationError> {
    if (MIN_DAYS..=MAX_DAYS).contains(&days) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            "days",
            f64::from(MIN_DAYS),
            f64::from(MAX_DAYS),
            f64::from(days),
        ))
    }
}

/// Validates the daily rent (100-2000 inclusive).
pub fn validate_rent_per_day(rent: f64) -> Result<(), ValidationError> {
    if rent.is_finite() && (MIN_RENT_PER_DAY..=MAX_RENT_PER_DAY).contains(&rent) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            "rentPerDay",
            MIN_RENT_PER_DAY,
            MAX_RENT_PER_DAY,
            rent,
        ))
    }
}
