//! Feedback domain module.
//!
//! The feedback lifecycle: anonymous submission, owner triage through the
//! status state machine, and the append-only status history.

mod aggregate;
mod errors;
mod feedback_type;
mod history;
mod status;

pub use aggregate::{Feedback, NewFeedback, StatusChange};
pub use errors::FeedbackError;
pub use feedback_type::FeedbackType;
pub use history::{NewStatusHistoryEntry, StatusHistoryEntry, SUBMISSION_NOTE};
pub use status::FeedbackStatus;
