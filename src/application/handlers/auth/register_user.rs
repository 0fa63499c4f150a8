//! RegisterUserHandler - Command handler for creating accounts.

use std::sync::Arc;

use crate::domain::user::{AccountError, Credentials, NewUser, User};
use crate::ports::{Clock, PasswordHasher, UnitOfWork};

/// Command to register a new project owner.
#[derive(Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Handler for registering users.
pub struct RegisterUserHandler {
    uow: Arc<dyn UnitOfWork>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl RegisterUserHandler {
    pub fn new(
        uow: Arc<dyn UnitOfWork>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { uow, hasher, clock }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, AccountError> {
        let credentials = Credentials::new(&cmd.email, &cmd.password)?;

        let mut tx = self.uow.begin().await?;

        // The unique constraint is the real guarantee; this gives the common
        // case a clean error before paying for a hash.
        if tx.find_user_by_email(credentials.email()).await?.is_some() {
            tracing::info!(email = %credentials.email(), "Registration rejected: email taken");
            return Err(AccountError::EmailTaken);
        }

        let password_hash = self.hasher.hash(credentials.password())?;
        let user = tx
            .insert_user(NewUser {
                email: credentials.email().to_string(),
                password_hash,
                created_at: self.clock.now(),
            })
            .await?;
        tx.commit().await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}
