//! Argon2id password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use crate::domain::foundation::AuthError;
use crate::ports::PasswordHasher;

/// Hashes passwords into PHC strings (`$argon2id$v=19$...`) with the
/// crate's default parameters and a fresh random salt.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Password hashing failed: {}", e);
                AuthError::service_unavailable("password hashing failed")
            })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            tracing::error!("Stored password hash is unreadable: {}", e);
            AuthError::service_unavailable("stored password hash is unreadable")
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => {
                tracing::error!("Password verification failed: {}", e);
                Err(AuthError::service_unavailable("password verification failed"))
            }
        }
    }
}

impl std::fmt::Debug for Argon2PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2PasswordHasher").finish_non_exhaustive()
    }
}
