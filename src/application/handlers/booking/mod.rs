//! Booking command and query handlers.

mod cancel_booking;
mod create_booking;
mod get_booking;
mod list_bookings;
mod summarize_bookings;
mod update_booking;

pub use cancel_booking::{CancelBookingCommand, CancelBookingHandler};
pub use create_booking::{CreateBookingCommand, CreateBookingHandler};
pub use get_booking::{GetBookingHandler, GetBookingQuery};
pub use list_bookings::{ListBookingsHandler, ListBookingsQuery};
pub use summarize_bookings::{SummarizeBookingsHandler, SummarizeBookingsQuery};
pub use update_booking::{UpdateBookingCommand, UpdateBookingHandler};
