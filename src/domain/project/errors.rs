//! Project-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, ValidationError};

/// Project registry errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    /// Project does not exist, or the caller does not own it.
    NotFound(ProjectId),
    /// No project is published under this slug.
    SlugNotFound(String),
    /// The public submission window has closed.
    Expired,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ProjectError {
    pub fn not_found(id: ProjectId) -> Self {
        ProjectError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ProjectError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProjectError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::NotFound(_) | ProjectError::SlugNotFound(_) => {
                ErrorCode::ProjectNotFound
            }
            ProjectError::Expired => ErrorCode::SubmissionWindowClosed,
            ProjectError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ProjectError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ProjectError::NotFound(_) | ProjectError::SlugNotFound(_) => {
                "Project not found".to_string()
            }
            ProjectError::Expired => {
                "Feedback submission for this project has expired".to_string()
            }
            ProjectError::ValidationFailed { message, .. } => message.clone(),
            ProjectError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProjectError {}

impl From<ValidationError> for ProjectError {
    fn from(err: ValidationError) -> Self {
        ProjectError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::InvalidFormat
            | ErrorCode::OutOfRange => ProjectError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => ProjectError::Infrastructure(err.to_string()),
        }
    }
}
