//! Builder for compiling declarations into machine definitions.

use crate::builder::declaration::{EventDeclaration, Sources};
use crate::builder::error::DefinitionError;
use crate::core::{connected_components, Event, MachineDefinition, State};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Builder for machine definitions with a fluent API.
///
/// Nothing is validated until [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use automaton::builder::DefinitionBuilder;
///
/// let definition = DefinitionBuilder::new()
///     .event("go", "red", "green")
///     .event("slowdown", "green", "yellow")
///     .event("stop", "yellow", "red")
///     .initial_state("red")
///     .accepting_states(["red", "green"])
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.states().len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DefinitionBuilder {
    events: Vec<EventDeclaration>,
    initial: Option<State>,
    accepting: Vec<State>,
}

impl DefinitionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder expecting roughly `events` declarations.
    ///
    /// This only sizes the declaration buffer. The connectivity check is
    /// sized from the derived state set when the definition is built.
    pub fn with_event_capacity(events: usize) -> Self {
        Self {
            events: Vec::with_capacity(events),
            ..Self::default()
        }
    }

    /// Declare an event.
    pub fn event(
        mut self,
        name: impl Into<String>,
        sources: impl Into<Sources>,
        destination: impl Into<State>,
    ) -> Self {
        self.events.push(EventDeclaration::new(name, sources, destination));
        self
    }

    /// Declare several events at once.
    pub fn events(mut self, events: impl IntoIterator<Item = EventDeclaration>) -> Self {
        self.events.extend(events);
        self
    }

    /// Set the default initial state (optional).
    pub fn initial_state(mut self, state: impl Into<State>) -> Self {
        self.initial = Some(state.into());
        self
    }

    pub fn maybe_initial_state(mut self, state: Option<State>) -> Self {
        self.initial = state;
        self
    }

    /// Set the default accepting states (optional, empty by default).
    pub fn accepting_states<S: Into<State>>(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting = states.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the declarations and compile the definition.
    ///
    /// Checks run in order: event shapes, default initial state, default
    /// accepting states, then connectivity. The first failure is returned.
    pub fn build(self) -> Result<Arc<MachineDefinition>, DefinitionError> {
        let result = self.compile();
        match &result {
            Ok(definition) => tracing::debug!(
                states = definition.states().len(),
                events = definition.events().len(),
                "built machine definition"
            ),
            Err(e) => tracing::debug!(error = %e, "rejected machine declaration"),
        }
        result.map(Arc::new)
    }

    fn compile(self) -> Result<MachineDefinition, DefinitionError> {
        let mut events: BTreeMap<String, Event> = BTreeMap::new();
        for declaration in self.events {
            if declaration.sources.is_empty() {
                return Err(DefinitionError::EmptySources {
                    event: declaration.name,
                });
            }
            if events.contains_key(&declaration.name) {
                return Err(DefinitionError::DuplicateEvent {
                    event: declaration.name,
                });
            }
            let sources: BTreeSet<State> = declaration.sources.into_vec().into_iter().collect();
            let event = Event::new(declaration.name.clone(), sources, declaration.destination);
            events.insert(declaration.name, event);
        }

        let states: BTreeSet<State> = events
            .values()
            .flat_map(|e| e.sources().iter().chain(std::iter::once(e.destination())))
            .cloned()
            .collect();

        if let Some(initial) = &self.initial {
            if !states.contains(initial) {
                return Err(DefinitionError::UnknownInitialState {
                    state: initial.to_string(),
                });
            }
        }

        let accepting = validate_accepting(&states, self.accepting)?;

        let components = connected_components(&states, events.values().flat_map(|e| e.edges()));
        if components > 1 {
            return Err(DefinitionError::Disconnected { components });
        }

        Ok(MachineDefinition::new(states, events, self.initial, accepting))
    }
}

/// Check every accepting state belongs to `states`.
pub(crate) fn validate_accepting(
    states: &BTreeSet<State>,
    accepting: impl IntoIterator<Item = State>,
) -> Result<BTreeSet<State>, DefinitionError> {
    accepting
        .into_iter()
        .map(|state| {
            if states.contains(&state) {
                Ok(state)
            } else {
                Err(DefinitionError::UnknownAcceptingState {
                    state: state.to_string(),
                })
            }
        })
        .collect()
}
