//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx-backed `UnitOfWork`
//! - `memory` - In-process `UnitOfWork` for tests and development
//! - `auth` - JWT tokens and Argon2 password hashing
//! - `clock`, `slug` - System time and random slug generation
//! - `http` - axum routers, DTOs and middleware

pub mod auth;
pub mod clock;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod slug;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryStore;
pub use postgres::PgUnitOfWork;
pub use slug::{RandomSlugGenerator, ScriptedSlugGenerator};
