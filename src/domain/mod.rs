//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `user` - Accounts and credentials
//! - `project` - Projects and their public submission link
//! - `feedback` - Feedback items, the status state machine, and status history

pub mod feedback;
pub mod foundation;
pub mod project;
pub mod user;
