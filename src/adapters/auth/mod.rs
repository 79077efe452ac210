//! Authentication adapters.
//!
//! - `jwt` - HS256 token issuing and validation
//! - `bcrypt_hasher` - Password hashing
//! - `mock` - Test token implementation that needs no secret

mod bcrypt_hasher;
mod jwt;
mod mock;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use jwt::{Claims, JwtTokenService};
pub use mock::MockTokenValidator;
