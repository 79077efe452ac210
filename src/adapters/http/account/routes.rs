//! HTTP routes for account endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, signup, AccountHandlers};

/// Creates the account router. Mounted under `/auth`; no token required.
///
/// # Routes
/// - `POST /signup` - Register a user
/// - `POST /login` - Obtain a bearer token
pub fn account_routes(handlers: AccountHandlers) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .with_state(handlers)
}
