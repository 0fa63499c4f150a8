//! Table-driven state machines.
//!
//! A status enum lists, once, the states each state may move to. Validation
//! and terminal detection are derived from that list.

use std::fmt;

/// The rejected edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError<S> {
    pub from: S,
    pub to: S,
}

impl<S: fmt::Display> fmt::Display for TransitionError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid status transition from {} to {}", self.from, self.to)
    }
}

impl<S: fmt::Debug + fmt::Display> std::error::Error for TransitionError<S> {}

pub trait StateMachine: Sized + Copy + PartialEq + fmt::Debug + 'static {
    /// Outgoing edges. A state never lists itself.
    fn valid_transitions(&self) -> &'static [Self];

    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn transition_to(&self, target: Self) -> Result<Self, TransitionError<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError { from: *self, to: target })
        }
    }

    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
