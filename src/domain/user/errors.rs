//! Account-specific error types.

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, UserId, ValidationError};

/// Errors from registration, login and identity lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Input was missing or malformed.
    ValidationFailed { field: String, message: String },
    /// Another account already uses this email.
    EmailTaken,
    /// Unknown email or wrong password. Deliberately indistinguishable.
    InvalidCredentials,
    /// The authenticated identity no longer exists.
    UserNotFound(UserId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl AccountError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::EmailTaken => ErrorCode::Conflict,
            AccountError::InvalidCredentials => ErrorCode::Unauthorized,
            AccountError::UserNotFound(_) => ErrorCode::UserNotFound,
            AccountError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AccountError::ValidationFailed { message, .. } => message.clone(),
            AccountError::EmailTaken => "Email address already in use".to_string(),
            AccountError::InvalidCredentials => "Invalid credentials".to_string(),
            AccountError::UserNotFound(_) => "User not found".to_string(),
            AccountError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<AuthError> for AccountError {
    fn from(err: AuthError) -> Self {
        AccountError::Infrastructure(err.to_string())
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Conflict => AccountError::EmailTaken,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat
            | ErrorCode::OutOfRange => AccountError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}
