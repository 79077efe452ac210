//! HTTP adapter for signup and login.

mod dto;
mod handlers;
mod routes;

pub use dto::{CredentialsRequest, LoginResponse, SignupResponse};
pub use handlers::AccountHandlers;
pub use routes::account_routes;
