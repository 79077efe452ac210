//! Per-user booking statistics.

use serde::Serialize;

use super::Booking;
use crate::domain::foundation::BookingStatus;

/// Usage statistics derived from one snapshot of a user's bookings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    /// Count of bookings that are booked or completed.
    pub total_bookings: usize,

    /// Sum of `total_cost` over the same set.
    pub total_amount_spent: f64,

    /// Bookings still in the `booked` state.
    pub upcoming_bookings: Vec<Booking>,
}

impl BookingSummary {
    /// Computes the summary. Cancelled bookings are excluded from the totals.
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let billable = bookings.iter().filter(|b| b.status().is_billable());

        let (total_bookings, total_amount_spent) = billable
            .fold((0usize, 0.0f64), |(count, sum), b| (count + 1, sum + b.total_cost()));

        let upcoming_bookings = bookings
            .iter()
            .filter(|b| b.status() == BookingStatus::Booked)
            .cloned()
            .collect();

        Self {
            total_bookings,
            total_amount_spent,
            upcoming_bookings,
        }
    }
}
