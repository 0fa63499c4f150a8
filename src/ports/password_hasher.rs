//! Password hashing port.

use crate::domain::foundation::AuthError;

/// One-way password hashing.
///
/// Hashes are self-describing strings (algorithm, parameters and salt
/// included) so `verify` needs nothing but the stored value.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only if the stored hash is unreadable.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
