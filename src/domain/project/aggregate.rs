//! Project aggregate.
//!
//! A project is owned by exactly one user and exposes a public slug through
//! which anonymous users submit feedback until the expiry window closes.

use crate::domain::foundation::{OwnedByUser, ProjectId, Timestamp, UserId, ValidationError};

use super::PublicSlug;

/// Expiry window applied when the owner does not choose one.
pub const DEFAULT_EXPIRY_DAYS: i32 = 3;

/// Longest expiry window an owner may configure.
pub const MAX_EXPIRY_DAYS: i32 = 365;

/// Project aggregate.
///
/// # Invariants
///
/// - `owner_id`, `public_slug` and `created_at` never change after creation
/// - `name` is non-empty
/// - `feedback_expiry_days` is within `1..=MAX_EXPIRY_DAYS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub public_slug: PublicSlug,
    pub feedback_expiry_days: i32,
    pub created_at: Timestamp,
}

impl Project {
    /// Instant after which public submissions are rejected.
    pub fn expires_at(&self) -> Timestamp {
        self.created_at.add_days(i64::from(self.feedback_expiry_days))
    }

    /// True while `now` has not passed the expiry instant.
    ///
    /// The expiry instant itself is still inside the window.
    pub fn accepts_feedback_at(&self, now: Timestamp) -> bool {
        !now.is_after(&self.expires_at())
    }

    /// Applies a partial update. Nothing changes unless every supplied field is valid.
    pub fn apply_patch(&mut self, patch: ProjectPatch) -> Result<(), ValidationError> {
        let name = patch.name.map(|n| validate_name(&n)).transpose()?;
        let days = patch
            .feedback_expiry_days
            .map(validate_expiry_days)
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = normalize_optional(description);
        }
        if let Some(product_url) = patch.product_url {
            self.product_url = normalize_optional(product_url);
        }
        if let Some(days) = days {
            self.feedback_expiry_days = days;
        }
        Ok(())
    }
}

impl OwnedByUser for Project {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Validated owner input for a new project, before a slug is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub feedback_expiry_days: i32,
}

impl ProjectDraft {
    pub fn new(
        name: &str,
        description: Option<String>,
        product_url: Option<String>,
        feedback_expiry_days: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            description: normalize_optional(description),
            product_url: normalize_optional(product_url),
            feedback_expiry_days: validate_expiry_days(feedback_expiry_days)?,
        })
    }

    /// Binds the draft to its owner, slug and creation instant.
    pub fn with_slug(
        &self,
        owner_id: UserId,
        public_slug: PublicSlug,
        created_at: Timestamp,
    ) -> NewProject {
        NewProject {
            owner_id,
            name: self.name.clone(),
            description: self.description.clone(),
            product_url: self.product_url.clone(),
            public_slug,
            feedback_expiry_days: self.feedback_expiry_days,
            created_at,
        }
    }
}

/// A project ready to insert; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub product_url: Option<String>,
    pub public_slug: PublicSlug,
    pub feedback_expiry_days: i32,
    pub created_at: Timestamp,
}

impl NewProject {
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            product_url: self.product_url,
            public_slug: self.public_slug,
            feedback_expiry_days: self.feedback_expiry_days,
            created_at: self.created_at,
        }
    }
}

/// Partial update of a project's mutable fields.
///
/// `None` leaves a field untouched. For the optional text fields,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub product_url: Option<Option<String>>,
    pub feedback_expiry_days: Option<i32>,
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    Ok(name.to_string())
}

fn validate_expiry_days(days: i32) -> Result<i32, ValidationError> {
    if !(1..=MAX_EXPIRY_DAYS).contains(&days) {
        return Err(ValidationError::out_of_range(
            "feedback_expiry_days",
            1,
            i64::from(MAX_EXPIRY_DAYS),
            i64::from(days),
        ));
    }
    Ok(days)
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
