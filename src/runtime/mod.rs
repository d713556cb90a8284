//! Instance runtime: creating machine instances and driving them with events.
//!
//! An instance owns its current state and holds a shared, read-only
//! reference to its [`MachineDefinition`]. Event dispatch is synchronous and
//! all-or-nothing: a rejected event leaves the instance exactly as it was.

mod error;
mod instance;
mod transition;

pub use error::InvalidTransitionError;
pub use instance::{InstanceBuilder, MachineInstance};
pub use transition::Transition;

use crate::builder::DefinitionError;
use crate::core::{MachineDefinition, State};
use std::sync::Arc;

/// Create an instance, optionally overriding the initial and accepting states.
///
/// # Example
///
/// ```
/// use automaton::builder::DefinitionBuilder;
/// use automaton::core::State;
/// use automaton::runtime::new_instance;
///
/// let definition = DefinitionBuilder::new()
///     .event("loop", "state_a", "state_a")
///     .build()
///     .unwrap();
///
/// let instance = new_instance(definition, Some(State::from("state_a")), None).unwrap();
/// assert_eq!(instance.state(), "state_a");
/// assert!(!instance.is_accepted());
/// ```
pub fn new_instance(
    definition: Arc<MachineDefinition>,
    initial_state: Option<State>,
    accepting_states: Option<Vec<State>>,
) -> Result<MachineInstance, DefinitionError> {
    InstanceBuilder::new(definition)
        .maybe_initial_state(initial_state)
        .maybe_accepting_states(accepting_states)
        .build()
}
