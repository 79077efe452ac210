//! SignupHandler - Command handler for registering users.

use std::sync::Arc;

use tracing::info;

use crate::domain::account::{validate_credentials, AccountError, User};
use crate::domain::foundation::UserId;
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct SignupCommand {
    pub username: String,
    pub password: String,
}

/// Handler for user signup.
pub struct SignupHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl SignupHandler {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Registers the user and returns the new user's id.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for short username or password
    /// - `UsernameTaken` if the username exists (checked up front and again
    ///   by the store's unique constraint)
    pub async fn handle(&self, cmd: SignupCommand) -> Result<UserId, AccountError> {
        validate_credentials(&cmd.username, &cmd.password)?;

        if self.users.find_by_username(&cmd.username).await?.is_some() {
            return Err(AccountError::UsernameTaken);
        }

        let password_hash = self.hasher.hash(&cmd.password).await?;
        let user = User::new(UserId::generate(), cmd.username, password_hash);
        self.users.save(&user).await?;

        info!(user_id = %user.id(), username = %user.username(), "User registered");

        Ok(user.id().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;

    /// Reversible stand-in so tests don't pay for bcrypt.
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

    fn handler(users: Arc<InMemoryUserRepository>) -> SignupHandler {
        SignupHandler::new(users, Arc::new(PlainHasher))
    }

    fn signup(username: &str, password: &str) -> SignupCommand {
        SignupCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn registers_user_with_hashed_password() {
        let users = Arc::new(InMemoryUserRepository::new());
        let id = handler(users.clone())
            .handle(signup("alice", "secret1"))
            .await
            .unwrap();

        let stored = users.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.id(), &id);
        assert_eq!(stored.password_hash(), "plain:secret1");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let users = Arc::new(InMemoryUserRepository::new());
        let handler = handler(users);
        handler.handle(signup("alice", "secret1")).await.unwrap();

        let result = handler.handle(signup("alice", "another")).await;
        assert_eq!(result, Err(AccountError::UsernameTaken));
    }

    #[tokio::test]
    async fn short_credentials_are_rejected() {
        let handler = handler(Arc::new(InMemoryUserRepository::new()));

        let result = handler.handle(signup("al", "secret1")).await;
        assert!(matches!(result, Err(AccountError::ValidationFailed(_))));

        let result = handler.handle(signup("alice", "12345")).await;
        assert!(matches!(result, Err(AccountError::ValidationFailed(_))));
    }
}
