//! Project domain module.
//!
//! Projects own their feedback, carry a collision-free public slug and define
//! the window during which anonymous submissions are accepted.

mod aggregate;
mod errors;
mod slug;

pub use aggregate::{
    NewProject, Project, ProjectDraft, ProjectPatch, DEFAULT_EXPIRY_DAYS, MAX_EXPIRY_DAYS,
};
pub use errors::ProjectError;
pub use slug::{PublicSlug, SLUG_ALPHABET, SLUG_LENGTH};
