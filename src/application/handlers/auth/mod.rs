//! Account command and query handlers.

mod get_current_user;
mod login;
mod register_user;

pub use get_current_user::{GetCurrentUserHandler, GetCurrentUserQuery};
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
