//! LoginHandler - Verifies credentials and issues an access token.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::account::{validate_credentials, AccountError};
use crate::domain::foundation::AuthenticatedUser;
use crate::ports::{PasswordHasher, TokenIssuer, UserRepository};

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Handler for login.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Returns a signed bearer token for valid credentials.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<String, AccountError> {
        validate_credentials(&cmd.username, &cmd.password)?;

        let user = match self.users.find_by_username(&cmd.username).await? {
            Some(user) => user,
            None => {
                debug!(username = %cmd.username, "Login for unknown username");
                return Err(AccountError::UnknownUsername);
            }
        };

        if !self.hasher.verify(&cmd.password, user.password_hash()).await? {
            debug!(user_id = %user.id(), "Login with wrong password");
            return Err(AccountError::WrongPassword);
        }

        let identity = AuthenticatedUser::new(user.id().clone(), user.username());
        let token = self.tokens.issue(&identity).await?;

        info!(user_id = %user.id(), "User logged in");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockTokenValidator;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::application::handlers::account::{SignupCommand, SignupHandler};
    use crate::domain::foundation::DomainError;
    use crate::ports::TokenValidator;
    use async_trait::async_trait;

    struct PlainHasher;

    #[async_trait]
    impl PasswordHasher for PlainHasher {
        async fn hash(&self, password: &str) -> Result<String, DomainError> {
            Ok(format!("plain:{}", password))
        }

        async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
            Ok(hash == format!("plain:{}", password))
        }
    }

    async fn setup() -> (LoginHandler, Arc<MockTokenValidator>) {
        let users = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(PlainHasher);
        SignupHandler::new(users.clone(), hasher.clone())
            .handle(SignupCommand {
                username: "alice".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        let tokens = Arc::new(MockTokenValidator::new());
        (LoginHandler::new(users, hasher, tokens.clone()), tokens)
    }

    fn login(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn issues_token_that_resolves_to_the_user() {
        let (handler, tokens) = setup().await;

        let token = handler.handle(login("alice", "secret1")).await.unwrap();

        let user = tokens.validate(&token).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn unknown_username_is_rejected() {
        let (handler, _) = setup().await;
        let result = handler.handle(login("bobby", "secret1")).await;
        assert_eq!(result, Err(AccountError::UnknownUsername));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (handler, _) = setup().await;
        let result = handler.handle(login("alice", "wrong-pass")).await;
        assert_eq!(result, Err(AccountError::WrongPassword));
    }

    #[tokio::test]
    async fn short_credentials_fail_validation() {
        let (handler, _) = setup().await;
        let result = handler.handle(login("al", "x")).await;
        assert!(matches!(result, Err(AccountError::ValidationFailed(_))));
    }
}
