//! Booking domain module.
//!
//! A booking moves through `booked -> completed -> cancelled`. The aggregate
//! enforces the transition table, keeps `total_cost` in step with `days` and
//! `rent_per_day`, and guards ownership. Bookings are never removed; deleting
//! one is a transition to `cancelled`.

mod aggregate;
mod errors;
mod patch;
mod summary;

pub use aggregate::{
    total_cost, validate_car_name, validate_days, validate_rent_per_day, Booking,
    MAX_CAR_NAME_LENGTH, MAX_DAYS, MAX_RENT_PER_DAY, MIN_CAR_NAME_LENGTH, MIN_DAYS,
    MIN_RENT_PER_DAY,
};
pub use errors::BookingError;
pub use patch::BookingPatch;
pub use summary::BookingSummary;
