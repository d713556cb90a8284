//! Transition model builder.
//!
//! Turns declaration data (events with their source and destination states,
//! an optional default initial state, optional default accepting states)
//! into a validated, immutable [`MachineDefinition`], or rejects it with a
//! [`DefinitionError`].

pub mod declaration;
pub mod error;
pub mod machine;
pub mod macros;

pub use declaration::{EventDeclaration, MachineDeclaration, Sources};
pub use error::DefinitionError;
pub use machine::DefinitionBuilder;

use crate::core::{MachineDefinition, State};
use std::sync::Arc;

/// Validate and compile a machine from event declarations.
///
/// # Example
///
/// ```
/// use automaton::builder::{build_definition, DefinitionError, EventDeclaration};
///
/// let events = vec![
///     EventDeclaration::new("cluster1", "state_a", "state_b"),
///     EventDeclaration::new("cluster2", "state_c", "state_d"),
/// ];
/// let result = build_definition(events.clone(), None, Vec::new());
/// assert_eq!(result.unwrap_err(), DefinitionError::Disconnected { components: 2 });
///
/// let mut events = events;
/// events.push(EventDeclaration::new("bridge", "state_b", "state_c"));
/// assert!(build_definition(events, Some("state_a".into()), vec!["state_d".into()]).is_ok());
/// ```
pub fn build_definition(
    events: impl IntoIterator<Item = EventDeclaration>,
    default_initial: Option<State>,
    default_accepting: Vec<State>,
) -> Result<Arc<MachineDefinition>, DefinitionError> {
    DefinitionBuilder::new()
        .events(events)
        .maybe_initial_state(default_initial)
        .accepting_states(default_accepting)
        .build()
}
