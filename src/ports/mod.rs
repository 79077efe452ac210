//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `BookingRepository` - Booking aggregate storage
//! - `UserRepository` - Registered user storage
//!
//! ## Auth Ports
//!
//! - `TokenValidator` - Resolves a bearer token to the caller identity
//! - `TokenIssuer` - Signs tokens at login
//! - `PasswordHasher` - One-way password hashing

mod booking_repository;
mod password_hasher;
mod token_issuer;
mod token_validator;
mod user_repository;

pub use booking_repository::BookingRepository;
pub use password_hasher::PasswordHasher;
pub use token_issuer::TokenIssuer;
pub use token_validator::TokenValidator;
pub use user_repository::UserRepository;
