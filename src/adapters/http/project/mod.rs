//! HTTP adapter for project endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};
pub use handlers::ProjectHandlers;
pub(crate) use handlers::handle_project_error;
pub use routes::project_routes;
