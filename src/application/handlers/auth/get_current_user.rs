//! GetCurrentUserHandler - Query handler for the caller's own account.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{AccountError, User};
use crate::ports::UnitOfWork;

/// Query for the authenticated caller's account.
#[derive(Debug, Clone)]
pub struct GetCurrentUserQuery {
    pub user_id: UserId,
}

pub struct GetCurrentUserHandler {
    uow: Arc<dyn UnitOfWork>,
}

impl GetCurrentUserHandler {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    pub async fn handle(&self, query: GetCurrentUserQuery) -> Result<User, AccountError> {
        let mut tx = self.uow.begin().await?;
        tx.find_user_by_id(query.user_id)
            .await?
            .ok_or(AccountError::UserNotFound(query.user_id))
    }
}
