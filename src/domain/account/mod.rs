//! Account domain module.
//!
//! Users sign up with a username and password and log in to receive a
//! bearer token. Passwords are stored only as hashes.

mod errors;
mod user;

pub use errors::AccountError;
pub use user::{validate_credentials, User, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
