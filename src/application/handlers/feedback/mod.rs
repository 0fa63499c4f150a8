//! Feedback command and query handlers.

mod get_feedback_history;
mod list_project_feedback;
mod submit_feedback;
mod update_feedback_status;

pub use get_feedback_history::{GetFeedbackHistoryHandler, GetFeedbackHistoryQuery};
pub use list_project_feedback::{ListProjectFeedbackHandler, ListProjectFeedbackQuery};
pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler};
pub use update_feedback_status::{UpdateFeedbackStatusCommand, UpdateFeedbackStatusHandler};
