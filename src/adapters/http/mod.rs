//! HTTP adapters - REST API implementations.
//!
//! - `account` - signup and login under `/auth`
//! - `booking` - authenticated booking lifecycle under `/bookings`
//! - `envelope` - `{success, data, error}` response wrapper
//! - `middleware` - bearer token extraction
//! - `router` - assembles everything with tracing, timeout and CORS layers

pub mod account;
pub mod booking;
pub mod envelope;
pub mod middleware;
pub mod router;

pub use envelope::{ApiResponse, MessageData};
pub use router::{api_routes, build_router, AppServices};
