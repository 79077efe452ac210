//! Token validation port.
//!
//! HTTP middleware uses this to turn a bearer token into the caller's
//! identity. Implementations are stateless and safe to call concurrently.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate an access token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct TestTokenValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    impl TestTokenValidator {
        fn new() -> Self {
            Self {
                tokens: RwLock::new(HashMap::new()),
            }
        }

        fn add_valid_token(&self, token: &str, user: AuthenticatedUser) {
            self.tokens.write().unwrap().insert(token.to_string(), user);
        }
    }

    #[async_trait]
    impl TokenValidator for TestTokenValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn validator_returns_user_for_known_token() {
        let validator = TestTokenValidator::new();
        let user = AuthenticatedUser::new(UserId::new("user-123").unwrap(), "alice");
        validator.add_valid_token("good", user.clone());

        assert_eq!(validator.validate("good").await, Ok(user));
    }

    #[tokio::test]
    async fn validator_rejects_unknown_token() {
        let validator = TestTokenValidator::new();
        assert_eq!(
            validator.validate("bad").await,
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn token_validator_is_object_safe() {
        fn _accepts_dyn(_v: &dyn TokenValidator) {}
    }
}
