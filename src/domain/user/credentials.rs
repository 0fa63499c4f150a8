//! Email/password pair supplied at registration and login.

use crate::domain::foundation::ValidationError;

/// Validated login credentials.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validates raw input.
    ///
    /// The email is trimmed and must contain `@`; the password must not be
    /// blank but is otherwise kept verbatim.
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        if password.trim().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }

        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
