//! HTTP adapter for owner-side feedback endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{FeedbackResponse, HistoryEntryResponse, SubmitFeedbackRequest, UpdateStatusRequest};
pub use handlers::FeedbackHandlers;
pub(crate) use handlers::handle_feedback_error;
pub use routes::feedback_routes;
