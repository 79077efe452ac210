//! Token issuing port, used by login.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Issues signed access tokens for an authenticated user.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token carrying the user's id and username.
    ///
    /// # Errors
    ///
    /// - `AuthError::SigningFailed` if the token cannot be produced
    async fn issue(&self, user: &AuthenticatedUser) -> Result<String, AuthError>;
}
