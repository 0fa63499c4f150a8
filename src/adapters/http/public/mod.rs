//! HTTP adapter for the unauthenticated submission pages.

mod dto;
mod handlers;
mod routes;

pub use dto::{PublicProjectResponse, SubmittedResponse};
pub use handlers::PublicHandlers;
pub use routes::public_routes;
