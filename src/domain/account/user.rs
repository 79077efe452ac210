//! Registered user account.

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A registered user. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    password_hash: String,
    created_at: Timestamp,
}

impl User {
    /// Creates a new user from an already-hashed password.
    pub fn new(id: UserId, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a user from persistence.
    pub fn reconstitute(
        id: UserId,
        username: String,
        password_hash: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Checks signup/login credentials against the length rules.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::too_short("username", MIN_USERNAME_LENGTH));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::too_short("password", MIN_PASSWORD_LENGTH));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_lengths() {
        assert!(validate_credentials("bob", "secret").is_ok());
    }

    #[test]
    fn rejects_short_username() {
        let err = validate_credentials("bo", "secret").unwrap_err();
        assert_eq!(err.field(), "username");
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_credentials("alice", "12345").unwrap_err();
        assert_eq!(err.field(), "password");
    }

    #[test]
    fn new_user_keeps_hash() {
        let user = User::new(UserId::generate(), "alice".into(), "$2b$04$hash".into());
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password_hash(), "$2b$04$hash");
    }
}
