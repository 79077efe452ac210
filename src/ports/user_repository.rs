//! User repository port.

use async_trait::async_trait;

use crate::domain::account::User;
use crate::domain::foundation::DomainError;

/// Repository port for registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the username is already taken
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
