//! HTTP adapter for booking endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BookingCreatedResponse, BookingResponse, BookingSummaryResponse, BookingsQuery,
    CreateBookingRequest, UpdateBookingRequest,
};
pub use handlers::{BookingHandlers, BOOKING_NOT_FOUND};
pub use routes::booking_routes;
