//! HTTP DTOs for project endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::adapters::http::extract::de;
use crate::domain::foundation::Timestamp;
use crate::domain::project::{Project, ProjectPatch};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default, deserialize_with = "de::text_or_blank")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub feedback_expiry_days: Option<i32>,
}

/// Partial update. An explicit `null` clears an optional field; an absent
/// field keeps its value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub product_url: Option<Option<String>>,
    #[serde(default)]
    pub feedback_expiry_days: Option<i32>,
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectPatch {
            name: req.name,
            description: req.description,
            product_url: req.product_url,
            feedback_expiry_days: req.feedback_expiry_days,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Owner's view of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub public_slug: String,
    pub feedback_expiry_days: i32,
    pub created_at: String,
    pub expiry_date: String,
    pub accepting_feedback: bool,
}

impl ProjectResponse {
    /// `accepting_feedback` is evaluated at `now`.
    pub fn new(project: Project, now: Timestamp) -> Self {
        Self {
            id: project.id.as_i64(),
            accepting_feedback: project.accepts_feedback_at(now),
            expiry_date: project.expires_at().to_rfc3339(),
            created_at: project.created_at.to_rfc3339(),
            public_slug: project.public_slug.to_string(),
            name: project.name,
            description: project.description,
            product_url: project.product_url,
            feedback_expiry_days: project.feedback_expiry_days,
        }
    }
}
