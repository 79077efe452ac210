//! HTTP DTOs for booking endpoints.
//!
//! Field names are camelCase on the wire. Request types carry the structural
//! checks that run before a command reaches the application layer.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use crate::domain::booking::{
    validate_car_name, validate_days, validate_rent_per_day, Booking, BookingPatch,
    BookingSummary,
};
use crate::domain::foundation::{BookingStatus, UserId, ValidationError};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub car_name: String,
    #[serde(deserialize_with = "whole_days")]
    pub days: u32,
    pub rent_per_day: f64,
}

impl CreateBookingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_car_name(&self.car_name)?;
        validate_days(self.days)?;
        validate_rent_per_day(self.rent_per_day)?;
        Ok(())
    }
}

/// Body of `PUT /bookings/:bookingId`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub car_name: Option<String>,
    #[serde(default, deserialize_with = "optional_whole_days")]
    pub days: Option<u32>,
    pub rent_per_day: Option<f64>,
    pub status: Option<BookingStatus>,
}

impl UpdateBookingRequest {
    /// Checks present fields and converts to a patch. An all-empty request
    /// passes here and is rejected by the aggregate.
    pub fn into_patch(self) -> Result<BookingPatch, ValidationError> {
        if let Some(name) = &self.car_name {
            validate_car_name(name)?;
        }
        if let Some(days) = self.days {
            validate_days(days)?;
        }
        if let Some(rent) = self.rent_per_day {
            validate_rent_per_day(rent)?;
        }
        Ok(BookingPatch {
            car_name: self.car_name,
            days: self.days,
            rent_per_day: self.rent_per_day,
            status: self.status,
        })
    }
}

/// Accepts `3` and `3.0`, rejects `2.5` and negatives.
fn whole_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(D::Error::custom(format!("days must be a whole number, got {}", value)))
    }
}

fn optional_whole_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    struct Days(#[serde(deserialize_with = "whole_days")] u32);

    Ok(Option::<Days>::deserialize(deserializer)?.map(|Days(days)| days))
}

/// Query string of `GET /bookings`.
///
/// Kept as raw strings so that an odd value selects the right error instead
/// of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsQuery {
    pub summary: Option<String>,
    pub booking_id: Option<String>,
    pub status: Option<String>,
}

impl BookingsQuery {
    pub fn wants_summary(&self) -> bool {
        self.summary.as_deref() == Some("true")
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Booking as returned by every read and update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    pub car_name: String,
    pub days: u32,
    pub rent_per_day: f64,
    pub total_cost: f64,
    pub status: BookingStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id().to_string(),
            user_id: booking.user_id().to_string(),
            car_name: booking.car_name().to_string(),
            days: booking.days(),
            rent_per_day: booking.rent_per_day(),
            total_cost: booking.total_cost(),
            status: booking.status(),
            created_at: booking.created_at().as_datetime().to_rfc3339(),
            updated_at: booking.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Result of `POST /bookings`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    pub message: String,
    pub booking_id: String,
    pub total_cost: f64,
}

/// Result of `GET /bookings?summary=true`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummaryResponse {
    pub user_id: String,
    pub total_bookings: usize,
    pub total_amount_spent: f64,
    pub upcoming_bookings: Vec<BookingResponse>,
}

impl BookingSummaryResponse {
    pub fn new(user_id: &UserId, summary: &BookingSummary) -> Self {
        Self {
            user_id: user_id.to_string(),
            total_bookings: summary.total_bookings,
            total_amount_spent: summary.total_amount_spent,
            upcoming_bookings: summary
                .upcoming_bookings
                .iter()
                .map(BookingResponse::from)
                .collect(),
        }
    }
}
