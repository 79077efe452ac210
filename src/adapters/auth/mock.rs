//! Mock token adapter for testing.
//!
//! Issues opaque random tokens and remembers which user each belongs to,
//! so handler and HTTP tests don't need a signing secret.
//!
//! # Example
//!
//! ```ignore
//! let tokens = MockTokenValidator::new()
//!     .with_user("valid-token", AuthenticatedUser::new(UserId::new("user-123")?, "alice"));
//!
//! let result = tokens.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::{TokenIssuer, TokenValidator};

/// Mock token validator and issuer.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockTokenValidator {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token for a user whose username equals the id.
    ///
    /// Ids that fail validation are skipped.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        match UserId::new(user_id.clone()) {
            Ok(id) => self.with_user(token, AuthenticatedUser::new(id, user_id)),
            Err(_) => self,
        }
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), user);
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[async_trait]
impl TokenIssuer for MockTokenValidator {
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError> {
        let token = format!("mock-{}", Uuid::new_v4());
        self.add_token(token.clone(), user.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_user() {
        let validator = MockTokenValidator::new().with_test_user("token-a", "user-a");

        let user = validator.validate("token-a").await.unwrap();
        assert_eq!(user.id.as_str(), "user-a");
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let validator = MockTokenValidator::new();
        assert_eq!(
            validator.validate("nope").await,
            Err(AuthError::InvalidToken)
        );
    }

    #[tokio::test]
    async fn forced_error_wins() {
        let validator = MockTokenValidator::new()
            .with_test_user("token-a", "user-a")
            .with_error(AuthError::TokenExpired);

        assert_eq!(
            validator.validate("token-a").await,
            Err(AuthError::TokenExpired)
        );
    }

    #[tokio::test]
    async fn issued_tokens_are_registered() {
        let validator = MockTokenValidator::new();
        let user = AuthenticatedUser::new(UserId::new("user-b").unwrap(), "bob");

        let token = validator.issue(&user).await.unwrap();

        assert_eq!(validator.token_count(), 1);
        assert_eq!(validator.validate(&token).await, Ok(user));
    }
}
