//! HTTP DTOs for the unauthenticated submission pages.

use serde::{Deserialize, Serialize};

use crate::domain::project::Project;

/// What a visitor sees before submitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProjectResponse {
    pub name: String,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub expires_at: String,
}

impl From<Project> for PublicProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            expires_at: project.expires_at().to_rfc3339(),
            name: project.name,
            description: project.description,
            product_url: project.product_url,
        }
    }
}

/// Response for an accepted submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedResponse {
    pub message: String,
    pub feedback_id: i64,
}
