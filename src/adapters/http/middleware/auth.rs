//! Authentication middleware and extractor for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that requires a valid Bearer token and injects
//!   the caller into request extensions
//! - `RequireAuth` - Extractor that reads the caller back out
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! let validator: Arc<dyn TokenValidator> = Arc::new(MockTokenValidator::new());
//!
//! let app = Router::new()
//!     .route("/bookings", get(list_bookings))
//!     .route_layer(middleware::from_fn_with_state(validator, auth_middleware));
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::envelope::failure;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenValidator;

/// Message for requests without a usable Authorization header.
pub const MISSING_TOKEN: &str = "Auth Token not Found";

/// Auth middleware state - wraps the token validator.
pub type AuthState = Arc<dyn TokenValidator>;

/// Returns the token from `Authorization: Bearer <token>`, if well-formed.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Authentication middleware that requires a valid Bearer token.
///
/// - Missing or malformed header: 403 "Auth Token not Found"
/// - Invalid or expired token: 401
/// - Valid token: `AuthenticatedUser` is inserted into request extensions
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        return AuthRejection::MissingToken.into_response();
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => AuthRejection::Rejected(e).into_response(),
    }
}

/// Extractor that requires authentication.
///
/// Reads the `AuthenticatedUser` placed by `auth_middleware`. If the route
/// is not behind the middleware, the request is rejected as unauthenticated.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::MissingToken)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No usable Bearer token was provided.
    MissingToken,
    /// The token was present but failed validation.
    Rejected(AuthError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::MissingToken => failure(StatusCode::FORBIDDEN, MISSING_TOKEN),
            AuthRejection::Rejected(e) if e.requires_reauthentication() => {
                failure(StatusCode::UNAUTHORIZED, e.to_string())
            }
            AuthRejection::Rejected(e) => {
                tracing::error!("Unexpected token error during validation: {}", e);
                failure(StatusCode::UNAUTHORIZED, AuthError::InvalidToken.to_string())
            }
        }
    }
}
