//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod booking;

pub use account::{LoginCommand, LoginHandler, SignupCommand, SignupHandler};
pub use booking::{
    CancelBookingCommand, CancelBookingHandler, CreateBookingCommand, CreateBookingHandler,
    GetBookingHandler, GetBookingQuery, ListBookingsHandler, ListBookingsQuery,
    SummarizeBookingsHandler, SummarizeBookingsQuery, UpdateBookingCommand, UpdateBookingHandler,
};
