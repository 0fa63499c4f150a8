//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UnitOfWork` / `Transaction` - Transaction boundary for every operation
//! - `UserRepository`, `ProjectRepository`, `FeedbackRepository` - Entity storage
//!
//! ## Identity Ports
//!
//! - `SessionValidator` - Resolves bearer tokens to an authenticated caller
//! - `TokenIssuer` - Signs access tokens at login
//! - `PasswordHasher` - One-way password hashing
//!
//! ## Environment Ports
//!
//! - `Clock` - Current time, for expiry decisions
//! - `SlugGenerator` - Random public slug candidates

mod clock;
mod feedback_repository;
mod password_hasher;
mod project_repository;
mod session_validator;
mod slug_generator;
mod token_issuer;
mod unit_of_work;
mod user_repository;

pub use clock::Clock;
pub use feedback_repository::FeedbackRepository;
pub use password_hasher::PasswordHasher;
pub use project_repository::ProjectRepository;
pub use session_validator::SessionValidator;
pub use slug_generator::SlugGenerator;
pub use token_issuer::{AccessToken, TokenIssuer};
pub use unit_of_work::{Transaction, UnitOfWork};
pub use user_repository::UserRepository;
