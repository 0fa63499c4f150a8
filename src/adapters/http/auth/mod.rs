//! HTTP adapter for account endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CredentialsRequest, MeResponse, RegisteredResponse};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
