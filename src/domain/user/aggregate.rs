//! User entity - a project owner's stored identity.

use crate::domain::foundation::{Timestamp, UserId};

/// A registered project owner.
///
/// # Invariants
///
/// - `email` is unique across all users (enforced by the store)
/// - `password_hash` is an opaque PHC string, never the plaintext password
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// A user that has been validated but not yet assigned an id by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

impl NewUser {
    /// Attaches the store-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        }
    }
}
