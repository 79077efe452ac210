//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresBookingRepository` - Booking aggregate persistence
//! - `PostgresUserRepository` - User accounts with a unique username
//! - `connect` / `run_migrations` - Pool setup at startup

mod booking_repository;
mod pool;
mod user_repository;

pub use booking_repository::PostgresBookingRepository;
pub use pool::{connect, run_migrations};
pub use user_repository::PostgresUserRepository;
