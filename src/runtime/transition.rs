//! Records of successful dispatches.

use crate::core::State;

/// A move performed by [`MachineInstance::dispatch`](super::MachineInstance::dispatch).
///
/// A self-loop yields a record with `from == to`; it is still a successful
/// dispatch, unlike a rejected event which yields an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The event that fired
    pub event: String,
    /// The state before the event
    pub from: State,
    /// The state after the event
    pub to: State,
}

impl Transition {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
