//! HTTP handlers for signup and login.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};

use crate::adapters::http::envelope::{
    failure, internal_error, invalid_request_schema, success, ApiResponse,
};
use crate::application::handlers::account::{
    LoginCommand, LoginHandler, SignupCommand, SignupHandler,
};
use crate::domain::account::AccountError;

use super::dto::{CredentialsRequest, LoginResponse, SignupResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AccountHandlers {
    signup_handler: Arc<SignupHandler>,
    login_handler: Arc<LoginHandler>,
}

impl AccountHandlers {
    pub fn new(signup_handler: Arc<SignupHandler>, login_handler: Arc<LoginHandler>) -> Self {
        Self {
            signup_handler,
            login_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /auth/signup - Register a user
pub async fn signup(
    State(handlers): State<AccountHandlers>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return invalid_request_schema();
    };

    let cmd = SignupCommand {
        username: req.username,
        password: req.password,
    };

    match handlers.signup_handler.handle(cmd).await {
        Ok(user_id) => success(
            StatusCode::CREATED,
            ApiResponse::ok(SignupResponse {
                message: "User created Successfully".to_string(),
                user_id: user_id.to_string(),
            }),
        ),
        Err(e) => handle_account_error(e),
    }
}

/// POST /auth/login - Exchange credentials for a bearer token
pub async fn login(
    State(handlers): State<AccountHandlers>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return invalid_request_schema();
    };

    let cmd = LoginCommand {
        username: req.username,
        password: req.password,
    };

    match handlers.login_handler.handle(cmd).await {
        Ok(token) => success(
            StatusCode::OK,
            ApiResponse::ok(LoginResponse {
                message: "Login Successful".to_string(),
                token,
            }),
        ),
        Err(e) => handle_account_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_account_error(error: AccountError) -> Response {
    match error {
        AccountError::ValidationFailed(_) => invalid_request_schema(),
        AccountError::UsernameTaken => failure(StatusCode::CONFLICT, error.to_string()),
        AccountError::UnknownUsername | AccountError::WrongPassword => {
            tracing::info!("Login rejected: {}", error);
            failure(StatusCode::UNAUTHORIZED, error.to_string())
        }
        AccountError::Infrastructure(msg) => {
            tracing::error!("Account operation failed: {}", msg);
            internal_error()
        }
    }
}
