//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `booking` - Booking aggregate, lifecycle rules and usage summary
//! - `account` - User accounts and credential rules

pub mod account;
pub mod booking;
pub mod foundation;
