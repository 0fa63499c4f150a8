//! LoginHandler - Verifies credentials and issues an access token.

use std::sync::Arc;

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::user::{AccountError, User};
use crate::ports::{AccessToken, PasswordHasher, TokenIssuer, UnitOfWork};

/// Command to exchange credentials for a token.
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: AccessToken,
}

/// Handler for logging in.
pub struct LoginHandler {
    uow: Arc<dyn UnitOfWork>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl LoginHandler {
    pub fn new(
        uow: Arc<dyn UnitOfWork>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            uow,
            hasher,
            tokens,
        }
    }

    /// Unknown email and wrong password fail identically.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AccountError> {
        let email = cmd.email.trim();
        if email.is_empty() || cmd.password.is_empty() {
            return Err(AccountError::validation(
                if email.is_empty() { "email" } else { "password" },
                "Email and password are required",
            ));
        }

        let user = {
            let mut tx = self.uow.begin().await?;
            tx.find_user_by_email(email).await?
        };

        let user = match user {
            Some(user) if self.hasher.verify(&cmd.password, &user.password_hash)? => user,
            _ => {
                tracing::info!("Login rejected: invalid credentials");
                return Err(AccountError::InvalidCredentials);
            }
        };

        let token = self
            .tokens
            .issue(&AuthenticatedUser::new(user.id, user.email.clone()))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(LoginResult { user, token })
    }
}
