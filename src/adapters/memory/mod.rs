//! In-memory adapters for tests and local development.

mod booking_repository;
mod user_repository;

pub use booking_repository::InMemoryBookingRepository;
pub use user_repository::InMemoryUserRepository;
