//! Project command and query handlers.

mod create_project;
mod delete_project;
mod get_project;
mod get_public_project;
mod list_projects;
mod update_project;

pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::{DeleteProjectCommand, DeleteProjectHandler};
pub use get_project::{GetProjectHandler, GetProjectQuery};
pub use get_public_project::{GetPublicProjectHandler, GetPublicProjectQuery};
pub use list_projects::{ListProjectsHandler, ListProjectsQuery};
pub use update_project::{UpdateProjectCommand, UpdateProjectHandler};
