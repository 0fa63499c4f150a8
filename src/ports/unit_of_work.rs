//! Transaction boundary port.
//!
//! Every application operation that reads and then writes runs inside one
//! `Transaction`. Commit publishes all writes together; dropping the
//! transaction without committing rolls everything back.
//!
//! # Example
//!
//! ```ignore
//! let mut tx = self.uow.begin().await?;
//! let mut feedback = tx.find_feedback_for_update(id).await?.ok_or(...)?;
//! let change = feedback.change_status(target, note, now)?;
//! tx.update_feedback(&feedback).await?;
//! tx.append_history(change.into()).await?;
//! tx.commit().await?;
//! ```

use async_trait::async_trait;

use super::{FeedbackRepository, ProjectRepository, UserRepository};
use crate::domain::foundation::DomainError;

/// Opens transactions against the persistent store.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Begin a new transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the store is unreachable
    async fn begin(&self) -> Result<Box<dyn Transaction>, DomainError>;
}

/// An open transaction exposing every repository.
///
/// Reads observe the transaction's own uncommitted writes.
#[async_trait]
pub trait Transaction: UserRepository + ProjectRepository + FeedbackRepository + Send {
    /// Atomically publish every write made through this transaction.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a uniqueness constraint was violated at commit time
    /// - `DatabaseError` on persistence failure
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;
}
