//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` mounts them all under `/api`.

pub mod auth;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod middleware;
pub mod project;
pub mod public;
pub mod router;

pub use error::ErrorResponse;
pub use extract::ApiJson;
pub use router::{api_router, app_router, Services};
