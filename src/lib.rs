//! Car Rental - Booking backend
//!
//! Users sign up, log in for a bearer token, and manage car bookings
//! through a small REST API. Bookings follow a fixed status lifecycle
//! (booked, completed, cancelled) and carry a derived total cost.
//!
//! Layout follows ports and adapters:
//! - `domain` - aggregates, value objects, and lifecycle rules
//! - `ports` - traits the application layer depends on
//! - `application` - command and query handlers
//! - `adapters` - HTTP, PostgreSQL, in-memory and auth implementations
//! - `config` - layered configuration from the environment

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
