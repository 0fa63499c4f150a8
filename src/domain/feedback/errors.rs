//! Feedback-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, FeedbackId, TransitionError, ValidationError,
};

use super::FeedbackStatus;

/// Feedback lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    /// Feedback item does not exist.
    NotFound(FeedbackId),
    /// Parent project does not exist, or the caller does not own it.
    ProjectNotFound,
    /// Caller does not own the project the feedback belongs to.
    Forbidden,
    /// The public submission window has closed.
    Expired,
    /// Requested status is not reachable from the current one.
    InvalidTransition {
        from: FeedbackStatus,
        to: FeedbackStatus,
    },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl FeedbackError {
    pub fn not_found(id: FeedbackId) -> Self {
        FeedbackError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FeedbackError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn note_required() -> Self {
        FeedbackError::validation("note", "A note is required to resolve feedback")
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        FeedbackError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            FeedbackError::NotFound(_) => ErrorCode::FeedbackNotFound,
            FeedbackError::ProjectNotFound => ErrorCode::ProjectNotFound,
            FeedbackError::Forbidden => ErrorCode::Forbidden,
            FeedbackError::Expired => ErrorCode::SubmissionWindowClosed,
            FeedbackError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            FeedbackError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            FeedbackError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            FeedbackError::NotFound(_) => "Feedback not found".to_string(),
            FeedbackError::ProjectNotFound => "Project not found".to_string(),
            FeedbackError::Forbidden => {
                "You do not have permission to modify this feedback".to_string()
            }
            FeedbackError::Expired => {
                "Feedback submission for this project has expired".to_string()
            }
            FeedbackError::InvalidTransition { from, to } => {
                format!("Invalid status transition from {} to {}", from, to)
            }
            FeedbackError::ValidationFailed { message, .. } => message.clone(),
            FeedbackError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FeedbackError {}

impl From<TransitionError<FeedbackStatus>> for FeedbackError {
    fn from(err: TransitionError<FeedbackStatus>) -> Self {
        FeedbackError::InvalidTransition {
            from: err.from,
            to: err.to,
        }
    }
}

impl From<ValidationError> for FeedbackError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::InvalidFormat { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        FeedbackError::validation(err.field().to_string(), message)
    }
}

impl From<DomainError> for FeedbackError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => FeedbackError::Forbidden,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat
            | ErrorCode::OutOfRange => FeedbackError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => FeedbackError::Infrastructure(err.to_string()),
        }
    }
}
