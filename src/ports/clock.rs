//! Clock port.
//!
//! Expiry is computed on read, so every time-dependent decision takes its
//! "now" from here. Tests substitute a fixed clock.

use crate::domain::foundation::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
