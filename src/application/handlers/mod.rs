//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! handler owns the ports it needs and opens its own unit of work.

pub mod auth;
pub mod feedback;
pub mod project;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{
    GetCurrentUserHandler, GetCurrentUserQuery, LoginCommand, LoginHandler, LoginResult,
    RegisterUserCommand, RegisterUserHandler,
};
pub use feedback::{
    GetFeedbackHistoryHandler, GetFeedbackHistoryQuery, ListProjectFeedbackHandler,
    ListProjectFeedbackQuery, SubmitFeedbackCommand, SubmitFeedbackHandler,
    UpdateFeedbackStatusCommand, UpdateFeedbackStatusHandler,
};
pub use project::{
    CreateProjectCommand, CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler,
    GetProjectHandler, GetProjectQuery, GetPublicProjectHandler, GetPublicProjectQuery,
    ListProjectsHandler, ListProjectsQuery, UpdateProjectCommand, UpdateProjectHandler,
};
