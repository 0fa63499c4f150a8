//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Accounts
    GetCurrentUserHandler, GetCurrentUserQuery, LoginCommand, LoginHandler, LoginResult,
    RegisterUserCommand, RegisterUserHandler,
    // Projects
    CreateProjectCommand, CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler,
    GetProjectHandler, GetProjectQuery, GetPublicProjectHandler, GetPublicProjectQuery,
    ListProjectsHandler, ListProjectsQuery, UpdateProjectCommand, UpdateProjectHandler,
    // Feedback
    GetFeedbackHistoryHandler, GetFeedbackHistoryQuery, ListProjectFeedbackHandler,
    ListProjectFeedbackQuery, SubmitFeedbackCommand, SubmitFeedbackHandler,
    UpdateFeedbackStatusCommand, UpdateFeedbackStatusHandler,
};
