//! User domain module.
//!
//! Project owners and the credentials they authenticate with. Users are
//! created at registration and never deleted.

mod aggregate;
mod credentials;
mod errors;

pub use aggregate::{NewUser, User};
pub use credentials::Credentials;
pub use errors::AccountError;
