//! Error vocabulary shared by every domain module.
//!
//! `ValidationError` comes out of value-object constructors. `DomainError`
//! is what ports report; each module folds it into its own typed error.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    EmptyField { field: String },

    #[error("{field} must be between {min} and {max} (got {actual})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        Self::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::EmptyField { field }
            | Self::OutOfRange { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyField { .. } => ErrorCode::EmptyField,
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
            Self::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Machine-readable error kind; rendered as the `code` of error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    UserNotFound,
    ProjectNotFound,
    FeedbackNotFound,
    InvalidStateTransition,
    SubmissionWindowClosed,
    Conflict,
    Unauthorized,
    Forbidden,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::EmptyField => "EMPTY_FIELD",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::FeedbackNotFound => "FEEDBACK_NOT_FOUND",
            Self::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            Self::SubmissionWindowClosed => "SUBMISSION_WINDOW_CLOSED",
            Self::Conflict => "CONFLICT",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Storage or programming faults, as opposed to caller mistakes.
    pub fn is_infrastructure(self) -> bool {
        matches!(self, Self::DatabaseError | Self::InternalError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported across a port boundary.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    /// Context such as the offending field or violated constraint.
    pub details: BTreeMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    /// A uniqueness constraint rejected the write.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }

    pub fn is_conflict(&self) -> bool {
        self.code == ErrorCode::Conflict
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.field().to_string(), err.to_string())
    }
}
