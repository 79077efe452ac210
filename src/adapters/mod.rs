//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT tokens, bcrypt hashing, and a mock token service for tests
//! - `http` - axum REST API
//! - `memory` - In-memory repositories for tests and local development
//! - `postgres` - sqlx-backed repositories and pool setup

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
