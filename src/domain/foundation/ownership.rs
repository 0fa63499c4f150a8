//! Single-owner authorization.
//!
//! A project has one owner and its feedback and history inherit that owner.
//! Reads that must not reveal existence use `is_owner` and answer not-found;
//! writes use `check_ownership` and answer forbidden.

use super::{DomainError, ErrorCode, UserId};

pub trait OwnedByUser {
    fn owner_id(&self) -> UserId;

    fn is_owner(&self, user_id: UserId) -> bool {
        self.owner_id() == user_id
    }

    fn check_ownership(&self, user_id: UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            return Ok(());
        }
        Err(
            DomainError::new(ErrorCode::Forbidden, "User does not own this resource")
                .with_detail("requested_by", user_id.to_string()),
        )
    }
}
