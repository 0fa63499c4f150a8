//! User repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, User};

/// Persistence for registered users.
#[async_trait]
pub trait UserRepository: Send {
    /// Insert a new user and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn insert_user(&mut self, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by exact email.
    async fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id.
    async fn find_user_by_id(&mut self, id: UserId) -> Result<Option<User>, DomainError>;
}
