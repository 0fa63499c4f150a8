//! Authentication adapters.
//!
//! Implementations of the identity ports:
//!
//! - `jwt` - HS256 token service (`TokenIssuer` + `SessionValidator`)
//! - `argon2_hasher` - Argon2id `PasswordHasher`
//! - `mock` - Test implementations without key material

mod argon2_hasher;
mod jwt;
mod mock;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::JwtTokenService;
pub use mock::{MockPasswordHasher, MockSessionValidator};
