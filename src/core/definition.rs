//! Compiled, immutable machine definitions.

use super::event::Event;
use super::state::State;
use crate::builder::declaration::{EventDeclaration, MachineDeclaration, Sources};
use std::collections::{BTreeMap, BTreeSet};

/// The validated shape of one machine type.
///
/// A definition is produced once by
/// [`DefinitionBuilder`](crate::builder::DefinitionBuilder) and then shared,
/// read-only, by every instance of that machine. Its invariants are checked at
/// build time and never re-checked:
///
/// - the state set is exactly the union of all event sources and destinations
/// - the default initial state, if any, is one of those states
/// - every default accepting state is one of those states
/// - the undirected state graph is connected (when non-empty)
///
/// The event table cannot be changed after the build:
///
/// ```compile_fail
/// use automaton::builder::DefinitionBuilder;
///
/// let definition = DefinitionBuilder::new().event("go", "red", "green").build().unwrap();
/// definition.events.clear();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineDefinition {
    states: BTreeSet<State>,
    events: BTreeMap<String, Event>,
    default_initial_state: Option<State>,
    default_accepting_states: BTreeSet<State>,
}

impl MachineDefinition {
    pub(crate) fn new(
        states: BTreeSet<State>,
        events: BTreeMap<String, Event>,
        default_initial_state: Option<State>,
        default_accepting_states: BTreeSet<State>,
    ) -> Self {
        Self {
            states,
            events,
            default_initial_state,
            default_accepting_states,
        }
    }

    /// Every state mentioned by any event.
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    /// Events keyed by name.
    pub fn events(&self) -> &BTreeMap<String, Event> {
        &self.events
    }

    /// Event names in lexical order.
    pub fn event_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.keys().map(String::as_str)
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.get(name)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn has_event(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    pub fn default_initial_state(&self) -> Option<&State> {
        self.default_initial_state.as_ref()
    }

    pub fn default_accepting_states(&self) -> &BTreeSet<State> {
        &self.default_accepting_states
    }

    /// True for the machine with no events and no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Turn the definition back into declaration data.
    ///
    /// Building the returned declaration yields an equal definition.
    pub fn to_declaration(&self) -> MachineDeclaration {
        MachineDeclaration {
            initial: self.default_initial_state.clone(),
            accepting: self.default_accepting_states.iter().cloned().collect(),
            events: self
                .events
                .values()
                .map(|event| EventDeclaration {
                    name: event.name().to_string(),
                    sources: Sources::from_iter(event.sources().iter().cloned()),
                    destination: event.destination().clone(),
                })
                .collect(),
        }
    }
}
