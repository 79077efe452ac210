//! Account-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};

/// Errors produced by signup and login.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("Username already in use . Try Other Username")]
    UsernameTaken,

    #[error("Username not found . Try Again")]
    UnknownUsername,

    #[error("Incorrect Password Try Again")]
    WrongPassword,

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationError),

    /// Store, hashing or token signing failure.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AccountError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::UsernameTaken => ErrorCode::Conflict,
            AccountError::UnknownUsername => ErrorCode::UserNotFound,
            AccountError::WrongPassword => ErrorCode::Unauthorized,
            AccountError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            AccountError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::ValidationFailed(err)
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => AccountError::UsernameTaken,
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

impl From<AuthError> for AccountError {
    fn from(err: AuthError) -> Self {
        AccountError::Infrastructure(err.to_string())
    }
}
