//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the behavioural
//! traits (state machine, ownership) shared by every aggregate.

mod auth;
mod errors;
mod ids;
mod ownership;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FeedbackId, HistoryEntryId, ProjectId, UserId};
pub use ownership::OwnedByUser;
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
